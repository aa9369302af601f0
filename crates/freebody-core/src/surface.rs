//! Drawing targets handed to the renderer.
//!
//! The renderer never reaches for a global canvas. It receives two handles:
//!
//! - a [`DrawingSurface`]: knows its pixel size, can be cleared, and accepts
//!   primitives one at a time;
//! - an [`OutputRegion`]: receives either formula markup (inserted unescaped,
//!   for a math typesetter to pick up) or a plain-text status message.
//!
//! [`Canvas`] and [`FormulaPanel`] are the in-memory implementations used by
//! the library and its tests.

use std::fmt;

use log::trace;

use crate::{
    draw::{Primitive, PrimitiveKind},
    geometry::Size,
};

/// A stateful drawing target supporting "clear all, then append".
pub trait DrawingSurface {
    /// Current dimensions of the surface in pixels.
    fn size(&self) -> Size;

    /// Removes every primitive previously added.
    fn clear(&mut self);

    /// Appends a primitive on top of the existing ones.
    fn add(&mut self, primitive: Primitive);
}

/// The text area that sits next to the diagram.
pub trait OutputRegion {
    /// Replaces the content with markup that is inserted as-is.
    fn set_markup(&mut self, markup: String);

    /// Replaces the content with plain text.
    fn set_text(&mut self, text: String);
}

/// An in-memory drawing surface holding the current primitives.
///
/// # Examples
///
/// ```
/// # use freebody_core::surface::{Canvas, DrawingSurface};
/// # use freebody_core::draw::{Text, TextDefinition};
/// # use freebody_core::geometry::{Point, Size};
/// let mut canvas = Canvas::new(Size::new(800.0, 600.0));
/// canvas.add(Text::new(TextDefinition::default(), "mg", Point::default()).into());
/// assert_eq!(canvas.len(), 1);
///
/// canvas.clear();
/// assert!(canvas.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    size: Size,
    primitives: Vec<Primitive>,
}

impl Canvas {
    /// Creates an empty canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    /// Changes the stored dimensions. Primitives are left untouched.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns the primitives in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the primitives of one kind, in insertion order.
    pub fn primitives_of(&self, kind: PrimitiveKind) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl DrawingSurface for Canvas {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        trace!(removed = self.primitives.len(); "Clearing canvas");
        self.primitives.clear();
    }

    fn add(&mut self, primitive: Primitive) {
        trace!(kind:% = primitive.kind(); "Adding primitive");
        self.primitives.push(primitive);
    }
}

/// What an [`OutputRegion`] currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelContent {
    #[default]
    Empty,
    /// Unescaped markup, e.g. formulas joined with `<br>`.
    Markup(String),
    /// A plain-text message.
    Text(String),
}

impl PanelContent {
    /// Returns the raw content string (empty for [`PanelContent::Empty`]).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Markup(content) | Self::Text(content) => content,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}

impl fmt::Display for PanelContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory [`OutputRegion`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaPanel {
    content: PanelContent,
}

impl FormulaPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }
}

impl OutputRegion for FormulaPanel {
    fn set_markup(&mut self, markup: String) {
        self.content = PanelContent::Markup(markup);
    }

    fn set_text(&mut self, text: String) {
        self.content = PanelContent::Text(text);
    }
}
