//! SVG export of a [`Canvas`].
//!
//! The document has the canvas size as both its dimensions and its
//! `viewBox`, so coordinates computed by the renderer map one-to-one to SVG
//! user units. Primitives are grouped into layers (see
//! [`RenderLayer`](freebody_core::draw::RenderLayer)) and every arrowhead
//! color gets a shared `<marker>` in `<defs>`.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use freebody_core::{
    color::Color,
    draw::{ArrowMarkers, Drawable, LayeredOutput, RenderLayer},
    surface::{Canvas, DrawingSurface},
};

/// Builds SVG documents from canvases.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints the whole document with `color` before any primitive.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Renders the canvas into an SVG document.
    pub fn export(&self, canvas: &Canvas) -> Document {
        let size = canvas.size();
        debug!(
            width = size.width(),
            height = size.height(),
            primitives = canvas.len();
            "Exporting canvas to SVG"
        );

        let mut markers = ArrowMarkers::new();
        let mut output = LayeredOutput::new();

        if let Some(color) = self.background {
            let bg = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        for primitive in canvas.primitives() {
            if let Some(arrow) = primitive.as_arrow() {
                markers.register(arrow);
            }
            output.merge(primitive.render_to_layers());
        }

        let mut doc = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            );

        if !markers.is_empty() {
            doc = doc.add(markers.render_definitions());
        }

        for node in output.render() {
            doc = doc.add(node);
        }

        doc
    }

    /// Renders the canvas into an SVG string.
    pub fn export_to_string(&self, canvas: &Canvas) -> String {
        let svg = self.export(canvas).to_string();
        info!(bytes = svg.len(); "SVG rendered");
        svg
    }
}
