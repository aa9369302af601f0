//! Interactive session around a single drawing surface.
//!
//! A [`Stage`] owns the [`Canvas`], the [`FormulaPanel`] next to it, and the
//! last scene it drew. It implements the three user-facing triggers:
//!
//! - [`Stage::generate`]: problem statement in, diagram out;
//! - [`Stage::show`]: draw an already available scene;
//! - [`Stage::resize`]: change the surface size and redraw the last scene.
//!
//! Failures never leave the stage unusable: the panel gets a failure message
//! and the next trigger starts fresh.

use log::{debug, error, info};

use freebody_core::{
    geometry::Size,
    scene::SceneDescription,
    surface::{Canvas, DrawingSurface, FormulaPanel, OutputRegion},
};

use crate::{
    FreebodyError,
    render::{DiagramRenderer, RenderError, RenderOutcome},
    source::SceneSource,
};

/// Message shown in the output region when a render attempt fails.
pub const RENDER_FAILURE_MESSAGE: &str = "Failed to generate the diagram from the analysis data.";

/// A canvas, its formula panel, and the scene currently on display.
#[derive(Debug)]
pub struct Stage {
    renderer: DiagramRenderer,
    canvas: Canvas,
    panel: FormulaPanel,
    last_scene: Option<SceneDescription>,
}

impl Stage {
    /// Creates an empty stage of the given size.
    pub fn new(renderer: DiagramRenderer, size: Size) -> Self {
        Self {
            renderer,
            canvas: Canvas::new(size),
            panel: FormulaPanel::new(),
            last_scene: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn panel(&self) -> &FormulaPanel {
        &self.panel
    }

    /// Returns the scene most recently rendered without error.
    pub fn last_scene(&self) -> Option<&SceneDescription> {
        self.last_scene.as_ref()
    }

    /// Analyzes `problem` with `source` and draws the resulting scene.
    ///
    /// # Errors
    ///
    /// - [`FreebodyError::MissingInput`] if `problem` is blank; nothing is
    ///   drawn and the panel is untouched.
    /// - Any analysis or render error. The panel then shows
    ///   [`RENDER_FAILURE_MESSAGE`].
    pub fn generate(
        &mut self,
        problem: &str,
        source: &dyn SceneSource,
    ) -> Result<RenderOutcome, FreebodyError> {
        let problem = problem.trim();
        if problem.is_empty() {
            return Err(FreebodyError::MissingInput);
        }

        info!(problem_len = problem.len(); "Analyzing problem statement");
        match source.analyze(problem) {
            Ok(scene) => self.show(scene),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Draws `scene` and remembers it for later redraws.
    ///
    /// # Errors
    ///
    /// Returns the render error; the panel then shows [`RENDER_FAILURE_MESSAGE`].
    pub fn show(&mut self, scene: SceneDescription) -> Result<RenderOutcome, FreebodyError> {
        match self.renderer.render(&mut self.canvas, &mut self.panel, &scene) {
            Ok(outcome) => {
                debug!(outcome:?, primitives = self.canvas.len(); "Scene rendered");
                self.last_scene = Some(scene);
                Ok(outcome)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Resizes the canvas and redraws the last scene, if any.
    ///
    /// Returns `Ok(None)` when nothing had been drawn yet.
    ///
    /// # Errors
    ///
    /// - [`RenderError::InvalidSurfaceSize`] if either dimension is not a
    ///   positive finite number; the stage is left untouched.
    /// - The render error if the redraw fails at the new size.
    pub fn resize(&mut self, size: Size) -> Result<Option<RenderOutcome>, FreebodyError> {
        debug!(width = size.width(), height = size.height(); "Resizing stage");
        if size.is_empty() || !size.width().is_finite() || !size.height().is_finite() {
            return Err(RenderError::InvalidSurfaceSize {
                width: size.width(),
                height: size.height(),
            }
            .into());
        }
        self.canvas.resize(size);

        let Some(scene) = self.last_scene.clone() else {
            return Ok(None);
        };

        self.show(scene).map(Some)
    }

    fn fail(&mut self, err: FreebodyError) -> FreebodyError {
        error!(err:%; "Failed to render diagram");
        self.panel.set_text(RENDER_FAILURE_MESSAGE.to_string());
        err
    }

    /// Current surface size.
    pub fn size(&self) -> Size {
        self.canvas.size()
    }
}
