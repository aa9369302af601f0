//! Drawing primitives for free-body diagrams.
//!
//! A rendered diagram is a flat list of [`Primitive`]s: polygons, rectangles,
//! arrows and text. Every primitive carries absolute coordinates and its own
//! styling, and implements [`Drawable`] to produce SVG nodes sorted into
//! [`RenderLayer`]s.

mod arrow;
mod layer;
mod polygon;
mod primitive;
mod rectangle;
mod stroke;
mod text;

pub use arrow::{Arrow, ArrowDefinition, ArrowMarkers};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use polygon::Polygon;
pub use primitive::{Primitive, PrimitiveKind};
pub use rectangle::Rectangle;
pub use stroke::StrokeDefinition;
pub use text::{Text, TextDefinition};

/// Something that can emit SVG nodes for itself.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element into layered SVG output.
    fn render_to_layers(&self) -> LayeredOutput;
}
