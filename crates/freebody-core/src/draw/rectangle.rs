//! Rotatable rectangles, used for the block resting on the incline.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// A rectangle positioned by its center and rotated about that center.
///
/// Rotation is in degrees, clockwise on screen; a negative rotation tilts the
/// rectangle counter-clockwise so it lies flush on a slope rising to the left.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    center: Point,
    size: Size,
    rotation: f32,
    fill: Color,
    stroke: StrokeDefinition,
}

impl Rectangle {
    pub fn new(center: Point, size: Size, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            center,
            size,
            rotation: 0.0,
            fill,
            stroke,
        }
    }

    /// Sets the rotation in degrees (builder style).
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn fill(&self) -> Color {
        self.fill
    }
}

impl Drawable for Rectangle {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.center.to_bounds(self.size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        rect = crate::apply_stroke!(rect, &self.stroke);

        if self.rotation != 0.0 {
            rect = rect.set(
                "transform",
                format!(
                    "rotate({} {} {})",
                    self.rotation,
                    self.center.x(),
                    self.center.y()
                ),
            );
        }

        output.add_to_layer(RenderLayer::Body, Box::new(rect));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Rectangle {
        Rectangle::new(
            Point::new(100.0, 50.0),
            Size::square(40.0),
            Color::new("red").unwrap(),
            StrokeDefinition::default(),
        )
    }

    #[test]
    fn test_rectangle_render_unrotated() {
        let rendered = block().render_to_layers().render()[0].to_string();

        assert!(rendered.contains("data-layer=\"body\""));
        assert!(rendered.contains("x=\"80\""));
        assert!(rendered.contains("y=\"30\""));
        assert!(rendered.contains("width=\"40\""));
        assert!(!rendered.contains("transform"));
    }

    #[test]
    fn test_rectangle_render_rotated_about_center() {
        let rect = block().with_rotation(-30.0);
        assert_eq!(rect.rotation(), -30.0);

        let rendered = rect.render_to_layers().render()[0].to_string();
        assert!(rendered.contains("transform=\"rotate(-30 100 50)\""));
    }
}
