//! Stroke definitions shared by all outlined primitives.
//!
//! Use the [`apply_stroke!`](crate::apply_stroke!) macro to put the stroke
//! attributes on an SVG element:
//!
//! ```
//! use freebody_core::draw::StrokeDefinition;
//! use freebody_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#555").unwrap(), 2.0);
//! let polygon = svg_element::Polygon::new().set("points", "0,0 10,0 0,10");
//! let polygon = freebody_core::apply_stroke!(polygon, &stroke);
//! assert!(polygon.to_string().contains("stroke-width=\"2\""));
//! ```

use crate::color::Color;

/// Color and width of a line or outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new solid stroke.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    /// Black, 1 unit wide.
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Applies the `stroke`, `stroke-opacity` and `stroke-width` attributes of a
/// [`StrokeDefinition`] to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
