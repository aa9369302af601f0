//! Scene-to-diagram rendering.
//!
//! [`DiagramRenderer`] turns a [`SceneDescription`] into primitives on a
//! [`DrawingSurface`] and writes the scene's formulas into an
//! [`OutputRegion`]. Each call starts by clearing the surface, so at most
//! one diagram is ever live on it.

mod incline;

pub use incline::{Force, ForceVector, InclineLayout};

use log::{debug, info, warn};
use thiserror::Error;

use freebody_core::{
    color::Color,
    draw::{Arrow, ArrowDefinition, Polygon, Rectangle, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size, normalize_degrees},
    scene::{Environment, SceneDescription},
    surface::{DrawingSurface, OutputRegion},
};

use crate::{
    FreebodyError,
    config::{AppConfig, LayoutConfig, Palette},
};

/// Message shown in the output region for scene types that cannot be drawn.
pub const UNSUPPORTED_SCENE_MESSAGE: &str = "Scene type not supported for drawing.";

/// Marker placed between formulas in the output region.
pub const FORMULA_SEPARATOR: &str = "<br>";

const INCLINE_STROKE_WIDTH: f32 = 2.0;
const BLOCK_STROKE_WIDTH: f32 = 1.0;
const ARROW_STROKE_WIDTH: f32 = 3.0;
const ARROW_POINTER_SIZE: f32 = 10.0;
const LABEL_FONT_SIZE: u16 = 16;
const LABEL_FONT_FAMILY: &str = "Arial";
const LABEL_OFFSET_X: f32 = 5.0;
const LABEL_OFFSET_Y: f32 = -10.0;

/// Errors raised while laying out or drawing a scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("incline angle must be strictly between 0 and 90 degrees, got {angle}")]
    DegenerateIncline { angle: f32 },

    #[error("diagram geometry is not finite")]
    NonFiniteGeometry,

    #[error("surface size must be positive and finite, got {width}x{height}")]
    InvalidSurfaceSize { width: f32, height: f32 },
}

/// What a successful call to [`DiagramRenderer::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The diagram was drawn and the formulas written.
    Drawn,
    /// The scene type is not drawable; the surface was cleared and the
    /// fallback message written.
    Unsupported,
}

/// Draws free-body diagrams with a fixed layout and palette.
#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    layout: LayoutConfig,
    palette: Palette,
}

impl DiagramRenderer {
    /// Builds a renderer from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FreebodyError::Config`] if the layout values are out of range
    /// or a palette entry is not a valid color.
    pub fn new(config: &AppConfig) -> Result<Self, FreebodyError> {
        config.layout().validate().map_err(FreebodyError::Config)?;
        let palette = config
            .style()
            .palette()
            .resolve()
            .map_err(FreebodyError::Config)?;

        Ok(Self {
            layout: config.layout().clone(),
            palette,
        })
    }

    /// Returns the layout constants in use.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Renders `scene` onto `surface` and writes its formulas to `output`.
    ///
    /// For an inclined plane the geometry is validated first; if it is
    /// degenerate the call fails and the surface keeps its previous content.
    /// Otherwise the surface is cleared and rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the incline geometry cannot be computed.
    pub fn render<S, O>(
        &self,
        surface: &mut S,
        output: &mut O,
        scene: &SceneDescription,
    ) -> Result<RenderOutcome, RenderError>
    where
        S: DrawingSurface + ?Sized,
        O: OutputRegion + ?Sized,
    {
        match *scene.environment() {
            Environment::InclinedPlane { angle, friction } => {
                let layout = InclineLayout::compute(surface.size(), angle, &self.layout)?;
                debug!(angle, friction, width = layout.width(); "Incline layout computed");

                surface.clear();
                self.draw_inclined_plane(surface, &layout);
                output.set_markup(scene.formulas().join(FORMULA_SEPARATOR));

                info!(formulas = scene.formulas().len(); "Inclined plane diagram rendered");
                Ok(RenderOutcome::Drawn)
            }
            Environment::Unknown => {
                warn!("Scene type not supported, nothing drawn");
                surface.clear();
                output.set_text(UNSUPPORTED_SCENE_MESSAGE.to_string());
                Ok(RenderOutcome::Unsupported)
            }
        }
    }

    fn draw_inclined_plane<S>(&self, surface: &mut S, layout: &InclineLayout)
    where
        S: DrawingSurface + ?Sized,
    {
        let incline = Polygon::new(
            layout.vertices().to_vec(),
            self.palette.incline_fill,
            StrokeDefinition::new(self.palette.incline_stroke, INCLINE_STROKE_WIDTH),
        );
        surface.add(incline.into());

        let block = Rectangle::new(
            layout.block_center(),
            Size::square(self.layout.block_size()),
            self.palette.block_fill,
            StrokeDefinition::new(self.palette.block_stroke, BLOCK_STROKE_WIDTH),
        )
        .with_rotation(layout.block_rotation());
        surface.add(block.into());

        for vector in layout.forces(self.layout.force_length()) {
            let force = vector.force();
            draw_arrow(
                surface,
                layout.block_center(),
                vector.direction(),
                vector.length(),
                force.label(),
                self.force_color(force),
            );
        }
    }

    fn force_color(&self, force: Force) -> Color {
        match force {
            Force::Gravity => self.palette.gravity,
            Force::Normal => self.palette.normal,
            Force::Friction => self.palette.friction,
        }
    }
}

/// Draws a labelled arrow of `length` units from `origin` in the direction
/// `angle_deg` and returns its tip.
///
/// Adds exactly two primitives: the arrow and its label. The label sits 10
/// units above the tip, 5 units to its right, or to its left when the arrow
/// points into the left half-plane (direction outside `[0, 180]` once folded
/// into `[0, 360)`).
pub fn draw_arrow<S>(
    surface: &mut S,
    origin: Point,
    angle_deg: f32,
    length: f32,
    label: &str,
    color: Color,
) -> Point
where
    S: DrawingSurface + ?Sized,
{
    let tip = origin.offset_polar(angle_deg, length);

    let definition = ArrowDefinition::new(StrokeDefinition::new(color, ARROW_STROKE_WIDTH))
        .with_pointer(ARROW_POINTER_SIZE, ARROW_POINTER_SIZE);
    surface.add(Arrow::new(definition, origin, tip).into());

    let mut text_definition = TextDefinition::new();
    text_definition.set_font_family(LABEL_FONT_FAMILY);
    text_definition.set_font_size(LABEL_FONT_SIZE);
    text_definition.set_color(Some(color));

    surface.add(Text::new(text_definition, label, label_position(tip, angle_deg)).into());

    tip
}

fn label_position(tip: Point, angle_deg: f32) -> Point {
    let offset_x = if normalize_degrees(angle_deg) <= 180.0 {
        LABEL_OFFSET_X
    } else {
        -LABEL_OFFSET_X
    };
    tip.add_point(Point::new(offset_x, LABEL_OFFSET_Y))
}
