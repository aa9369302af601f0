//! Filled, outlined polygons such as the incline triangle.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// A closed polygon through a list of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    fill: Color,
    stroke: StrokeDefinition,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            points,
            fill,
            stroke,
        }
    }

    /// Returns the vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn points_attribute(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Drawable for Polygon {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let polygon = svg_element::Polygon::new()
            .set("points", self.points_attribute())
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        let polygon = crate::apply_stroke!(polygon, &self.stroke);

        output.add_to_layer(RenderLayer::Incline, Box::new(polygon));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(
            vec![
                Point::new(0.0, 100.0),
                Point::new(50.0, 100.0),
                Point::new(0.0, 0.0),
            ],
            Color::new("#ccc").unwrap(),
            StrokeDefinition::new(Color::new("#555").unwrap(), 2.0),
        )
    }

    #[test]
    fn test_polygon_points_attribute() {
        assert_eq!(triangle().points_attribute(), "0,100 50,100 0,0");
    }

    #[test]
    fn test_polygon_render_to_layers() {
        let groups = triangle().render_to_layers().render();
        assert_eq!(groups.len(), 1);

        let rendered = groups[0].to_string();
        assert!(rendered.contains("data-layer=\"incline\""));
        assert!(rendered.contains("<polygon"));
        assert!(rendered.contains("points=\"0,100 50,100 0,0\""));
        assert!(rendered.contains("stroke-width=\"2\""));
    }
}
