use std::fmt;

use crate::draw::{Arrow, Drawable, LayeredOutput, Polygon, Rectangle, Text};

/// One element of a drawing surface's scene graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polygon(Polygon),
    Rectangle(Rectangle),
    Arrow(Arrow),
    Text(Text),
}

/// Discriminant of a [`Primitive`], handy for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Polygon,
    Rectangle,
    Arrow,
    Text,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Polygon(_) => PrimitiveKind::Polygon,
            Self::Rectangle(_) => PrimitiveKind::Rectangle,
            Self::Arrow(_) => PrimitiveKind::Arrow,
            Self::Text(_) => PrimitiveKind::Text,
        }
    }

    /// Returns the arrow if this primitive is one.
    pub fn as_arrow(&self) -> Option<&Arrow> {
        match self {
            Self::Arrow(arrow) => Some(arrow),
            _ => None,
        }
    }

    /// Returns the text if this primitive is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Polygon => "polygon",
            Self::Rectangle => "rectangle",
            Self::Arrow => "arrow",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

impl Drawable for Primitive {
    fn render_to_layers(&self) -> LayeredOutput {
        match self {
            Self::Polygon(polygon) => polygon.render_to_layers(),
            Self::Rectangle(rectangle) => rectangle.render_to_layers(),
            Self::Arrow(arrow) => arrow.render_to_layers(),
            Self::Text(text) => text.render_to_layers(),
        }
    }
}

impl From<Polygon> for Primitive {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Rectangle> for Primitive {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Arrow> for Primitive {
    fn from(arrow: Arrow) -> Self {
        Self::Arrow(arrow)
    }
}

impl From<Text> for Primitive {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        draw::{ArrowDefinition, TextDefinition},
        geometry::Point,
    };

    #[test]
    fn test_primitive_kind_and_accessors() {
        let arrow: Primitive =
            Arrow::new(ArrowDefinition::default(), Point::default(), Point::new(1.0, 1.0)).into();
        let text: Primitive = Text::new(TextDefinition::default(), "N", Point::default()).into();

        assert_eq!(arrow.kind(), PrimitiveKind::Arrow);
        assert!(arrow.as_arrow().is_some());
        assert!(arrow.as_text().is_none());

        assert_eq!(text.kind(), PrimitiveKind::Text);
        assert_eq!(text.as_text().map(Text::content), Some("N"));
        assert_eq!(text.kind().to_string(), "text");
    }

    #[test]
    fn test_primitive_render_delegates() {
        let text: Primitive = Text::new(TextDefinition::default(), "mg", Point::default()).into();
        let rendered = text.render_to_layers().render()[0].to_string();
        assert!(rendered.contains("mg"));
    }
}
