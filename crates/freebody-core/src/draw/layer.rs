//! Layer-based ordering for SVG output.
//!
//! Primitives are added to a surface in the order the renderer produces
//! them, but the SVG has to paint the incline below the block and every
//! label above the arrows. Each primitive therefore tags its nodes with a
//! [`RenderLayer`], and [`LayeredOutput::render`] emits one `<g>` per layer
//! in bottom-to-top order.
//!
//! # Example
//!
//! ```
//! # use freebody_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Polygon, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Label, Box::new(Text::new("mg")));
//! output.add_to_layer(RenderLayer::Incline, Box::new(Polygon::new()));
//!
//! // The incline group comes first even though it was added last
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! assert!(groups[0].to_string().contains("data-layer=\"incline\""));
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill of the whole surface
    Background,
    /// The inclined plane
    Incline,
    /// Bodies resting on the plane
    Body,
    /// Force vectors
    Force,
    /// Force labels
    Label,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Incline => "incline",
            Self::Body => "body",
            Self::Force => "force",
            Self::Label => "label",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes of another output to this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Nodes
    /// within a layer keep their insertion order.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
