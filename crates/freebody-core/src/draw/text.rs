//! Text primitives used for force labels.
//!
//! - [`TextDefinition`] - Reusable text style (font family, size, color)
//! - [`Text`] - A positioned string rendered with a [`TextDefinition`]
//!
//! A [`Text`] is anchored at its top-left corner, like a label on an HTML
//! canvas, so the renderer can offset it from an arrow tip without measuring
//! the string first.
//!
//! ```
//! # use freebody_core::draw::{Text, TextDefinition};
//! # use freebody_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(16);
//!
//! let label = Text::new(style, "mg", Point::new(405.0, 390.0));
//! assert_eq!(label.content(), "mg");
//! ```

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `16` |
/// | Text color | `None` (SVG default, black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family, e.g. `"Arial"` or `"monospace"`.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the fill color of the text. `None` uses the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 16,
            color: None,
        }
    }
}

/// A string placed at an absolute top-left position.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
}

impl Text {
    /// Creates a new text element.
    ///
    /// # Arguments
    ///
    /// * `definition` - The [`TextDefinition`] controlling text appearance.
    /// * `content` - The string to render.
    /// * `position` - Top-left corner of the text box.
    pub fn new(definition: TextDefinition, content: impl Into<String>, position: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            position,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the top-left anchor of the text.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl Drawable for Text {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("dominant-baseline", "hanging")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .add(SvgText::new(self.content.as_str()));

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        output.add_to_layer(RenderLayer::Label, Box::new(rendered_text));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_default() {
        let definition = TextDefinition::default();
        assert_eq!(definition.font_family(), "Arial");
        assert_eq!(definition.font_size(), 16);
        assert!(definition.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut definition = TextDefinition::new();
        definition.set_font_family("monospace");
        definition.set_font_size(12);
        definition.set_color(Some(Color::new("green").unwrap()));

        assert_eq!(definition.font_family(), "monospace");
        assert_eq!(definition.font_size(), 12);
        assert_eq!(definition.color(), Some(Color::new("green").unwrap()));
    }

    #[test]
    fn test_text_render_to_layers() {
        let mut definition = TextDefinition::new();
        definition.set_color(Some(Color::new("blue").unwrap()));
        let text = Text::new(definition, "F_tr", Point::new(12.5, 40.0));

        let groups = text.render_to_layers().render();
        assert_eq!(groups.len(), 1);

        let rendered = groups[0].to_string();
        assert!(rendered.contains("data-layer=\"label\""));
        assert!(rendered.contains("F_tr"));
        assert!(rendered.contains("x=\"12.5\""));
        assert!(rendered.contains("y=\"40\""));
        assert!(rendered.contains("font-family=\"Arial\""));
    }

    #[test]
    fn test_text_without_color_has_no_fill() {
        let text = Text::new(TextDefinition::default(), "N", Point::default());
        let rendered = text.render_to_layers().render()[0].to_string();
        assert!(!rendered.contains("fill="));
    }
}
