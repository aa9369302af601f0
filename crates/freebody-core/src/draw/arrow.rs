//! Arrow primitives and SVG arrowhead markers.
//!
//! An [`Arrow`] is a straight line from a start point to a tip with a filled
//! triangular head at the tip. Heads are emitted as SVG `<marker>`s shared by
//! every arrow of the same color and head size, so the exporter collects them
//! up front with an [`ArrowMarkers`] and writes them into `<defs>`.

use std::collections::BTreeMap;

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// Visual properties of an arrow: line stroke and head dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDefinition {
    stroke: StrokeDefinition,
    pointer_length: f32,
    pointer_width: f32,
}

impl ArrowDefinition {
    /// Creates an arrow definition with a 10x10 head.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            pointer_length: 10.0,
            pointer_width: 10.0,
        }
    }

    /// Sets the head length (along the shaft) and width (across it).
    pub fn with_pointer(mut self, length: f32, width: f32) -> Self {
        self.pointer_length = length;
        self.pointer_width = width;
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn pointer_length(&self) -> f32 {
        self.pointer_length
    }

    pub fn pointer_width(&self) -> f32 {
        self.pointer_width
    }

    fn marker_id(&self) -> String {
        format!(
            "arrowhead-{}-{}x{}",
            self.stroke.color().to_id_safe_string(),
            self.pointer_length.round() as i32,
            self.pointer_width.round() as i32
        )
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self::new(StrokeDefinition::default())
    }
}

/// A straight arrow between two absolute points.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    definition: ArrowDefinition,
    start: Point,
    end: Point,
}

impl Arrow {
    pub fn new(definition: ArrowDefinition, start: Point, end: Point) -> Self {
        Self {
            definition,
            start,
            end,
        }
    }

    /// Returns the tail of the arrow.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the tip of the arrow.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the shaft length.
    pub fn length(&self) -> f32 {
        self.end.sub_point(self.start).hypot()
    }

    /// Returns the direction from start to tip in degrees, in `(-180, 180]`,
    /// clockwise on screen.
    pub fn direction(&self) -> f32 {
        let delta = self.end.sub_point(self.start);
        delta.y().atan2(delta.x()).to_degrees()
    }

    pub fn definition(&self) -> &ArrowDefinition {
        &self.definition
    }
}

impl Drawable for Arrow {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y())
            .set(
                "marker-end",
                format!("url(#{})", self.definition.marker_id()),
            );
        let line = crate::apply_stroke!(line, self.definition.stroke());

        output.add_to_layer(RenderLayer::Force, Box::new(line));
        output
    }
}

/// Collects the arrowhead markers needed by a set of arrows.
#[derive(Debug, Default)]
pub struct ArrowMarkers {
    markers: BTreeMap<String, ArrowDefinition>,
}

impl ArrowMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the marker used by `arrow`.
    pub fn register(&mut self, arrow: &Arrow) {
        let definition = arrow.definition();
        self.markers
            .entry(definition.marker_id())
            .or_insert_with(|| definition.clone());
    }

    /// Number of distinct markers collected so far.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Renders a `<defs>` element containing every collected marker.
    pub fn render_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        for (id, definition) in &self.markers {
            defs = defs.add(Self::create_marker(id, definition));
        }
        Box::new(defs)
    }

    fn create_marker(id: &str, definition: &ArrowDefinition) -> svg_element::Marker {
        let color = definition.stroke().color();
        svg_element::Marker::new()
            .set("id", id)
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerUnits", "userSpaceOnUse")
            .set("markerWidth", definition.pointer_length())
            .set("markerHeight", definition.pointer_width())
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::color::Color;

    fn blue_arrow(end: Point) -> Arrow {
        let stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 3.0);
        Arrow::new(ArrowDefinition::new(stroke), Point::new(0.0, 0.0), end)
    }

    #[test]
    fn test_arrow_definition_defaults() {
        let definition = ArrowDefinition::default();
        assert_eq!(definition.pointer_length(), 10.0);
        assert_eq!(definition.pointer_width(), 10.0);
        assert_eq!(definition.stroke().width(), 1.0);

        let definition = definition.with_pointer(12.0, 8.0);
        assert_eq!(definition.pointer_length(), 12.0);
        assert_eq!(definition.pointer_width(), 8.0);
    }

    #[test]
    fn test_arrow_length_and_direction() {
        let arrow = blue_arrow(Point::new(0.0, 100.0));
        assert_approx_eq!(f32, arrow.length(), 100.0);
        assert_approx_eq!(f32, arrow.direction(), 90.0, epsilon = 1e-4);

        let arrow = blue_arrow(Point::new(-3.0, 0.0));
        assert_approx_eq!(f32, arrow.direction(), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_arrow_render_references_marker() {
        let arrow = blue_arrow(Point::new(10.0, 20.0));
        let rendered = arrow.render_to_layers().render()[0].to_string();

        assert!(rendered.contains("data-layer=\"force\""));
        assert!(rendered.contains("<line"));
        assert!(rendered.contains("x2=\"10\""));
        assert!(rendered.contains("y2=\"20\""));
        assert!(rendered.contains("marker-end=\"url(#arrowhead-"));
    }

    #[test]
    fn test_arrow_markers_deduplicate_by_color() {
        let mut markers = ArrowMarkers::new();
        assert!(markers.is_empty());

        markers.register(&blue_arrow(Point::new(1.0, 0.0)));
        markers.register(&blue_arrow(Point::new(0.0, 1.0)));
        assert_eq!(markers.len(), 1);

        let green = StrokeDefinition::new(Color::new("green").unwrap(), 3.0);
        markers.register(&Arrow::new(
            ArrowDefinition::new(green),
            Point::default(),
            Point::new(5.0, 5.0),
        ));
        assert_eq!(markers.len(), 2);

        let defs = markers.render_definitions().to_string();
        assert_eq!(defs.matches("<marker").count(), 2);
        assert!(defs.contains("markerUnits=\"userSpaceOnUse\""));
    }
}
