//! Freebody - free-body diagrams from physics scene descriptions.
//!
//! A scene description (environment, bodies, formulas) is laid out as a
//! labelled vector diagram and exported to SVG. Only the inclined plane is
//! drawable; other environments produce a fallback message.
//!
//! The main pieces are:
//!
//! - [`DiagramRenderer`]: draws a scene onto any [`DrawingSurface`](surface::DrawingSurface);
//! - [`Stage`]: a canvas, its formula panel and the last scene, with resize support;
//! - [`SceneSource`]: where scenes come from ([`MockAnalysis`], [`JsonScene`]);
//! - [`FreebodyBuilder`]: one-call rendering of a scene to SVG.

pub mod config;
pub mod export;

mod error;
mod render;
mod source;
mod stage;

pub use freebody_core::{color, draw, geometry, scene, surface};

pub use error::FreebodyError;
pub use render::{
    DiagramRenderer, FORMULA_SEPARATOR, Force, ForceVector, InclineLayout, RenderError,
    RenderOutcome, UNSUPPORTED_SCENE_MESSAGE, draw_arrow,
};
pub use source::{JsonScene, MockAnalysis, SceneSource, parse_scene};
pub use stage::{RENDER_FAILURE_MESSAGE, Stage};

use log::{debug, info};

use config::AppConfig;
use export::svg::SvgExporter;
use geometry::Size;
use scene::SceneDescription;
use surface::PanelContent;

/// Default surface width, in pixels.
pub const DEFAULT_WIDTH: f32 = 800.0;

/// Default surface height, in pixels.
pub const DEFAULT_HEIGHT: f32 = 600.0;

/// Builder for parsing and rendering Freebody scenes.
///
/// # Examples
///
/// ```rust
/// use freebody::{FreebodyBuilder, RenderOutcome, config::AppConfig, geometry::Size};
///
/// let source = r#"{
///     "environment": {"type": "inclined_plane", "angle": 30, "friction": true},
///     "objects": [{"id": "block1", "mass": 2, "unit": "kg"}],
///     "formulas": ["F=ma"]
/// }"#;
///
/// let builder = FreebodyBuilder::new(AppConfig::default());
/// let scene = builder.parse(source).expect("Failed to parse");
/// let diagram = builder
///     .render(&scene, Size::new(800.0, 600.0))
///     .expect("Failed to render");
///
/// assert_eq!(diagram.outcome(), RenderOutcome::Drawn);
/// assert!(diagram.svg().contains("<svg"));
/// assert_eq!(diagram.output().as_str(), "F=ma");
/// ```
#[derive(Debug, Default)]
pub struct FreebodyBuilder {
    config: AppConfig,
}

impl FreebodyBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON scene description.
    ///
    /// # Errors
    ///
    /// Returns [`FreebodyError::Scene`] for malformed JSON or a document that
    /// does not match the scene shape.
    pub fn parse(&self, source: &str) -> Result<SceneDescription, FreebodyError> {
        info!("Parsing scene description");
        let scene = parse_scene(source)?;
        debug!(environment = scene.environment().kind(); "Scene parsed successfully");
        Ok(scene)
    }

    /// Creates a [`Stage`] of the given size using this builder's configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FreebodyError::Config`] for an invalid configuration.
    pub fn stage(&self, size: Size) -> Result<Stage, FreebodyError> {
        let renderer = DiagramRenderer::new(&self.config)?;
        Ok(Stage::new(renderer, size))
    }

    /// Render a scene on a fresh surface of `size` and export it to SVG.
    ///
    /// # Errors
    ///
    /// Returns [`FreebodyError`] for configuration or render errors.
    pub fn render(
        &self,
        scene: &SceneDescription,
        size: Size,
    ) -> Result<RenderedDiagram, FreebodyError> {
        let mut stage = self.stage(size)?;
        let outcome = stage.show(scene.clone())?;
        self.export(&stage, outcome)
    }

    /// Export the current content of a stage.
    ///
    /// # Errors
    ///
    /// Returns [`FreebodyError::Config`] if the background color is invalid.
    pub fn export(
        &self,
        stage: &Stage,
        outcome: RenderOutcome,
    ) -> Result<RenderedDiagram, FreebodyError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(FreebodyError::Config)?;

        let svg = SvgExporter::new()
            .with_background(background)
            .export_to_string(stage.canvas());

        Ok(RenderedDiagram {
            svg,
            output: stage.panel().content().clone(),
            outcome,
        })
    }
}

/// The result of rendering a scene: SVG document and output-region content.
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    svg: String,
    output: PanelContent,
    outcome: RenderOutcome,
}

impl RenderedDiagram {
    /// The SVG document.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// What the output region shows: formula markup or a message.
    pub fn output(&self) -> &PanelContent {
        &self.output
    }

    pub fn outcome(&self) -> RenderOutcome {
        self.outcome
    }
}
