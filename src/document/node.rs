//! Layer tree representation.

/// A loaded layered-image source document.
///
/// Owns a tree of nodes in the document's native stacking order. Read-only
/// once built by the backend that opened it.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source filename, e.g. `character.psd`. Identifies the document in the
    /// manifest.
    pub name: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Root-level child nodes.
    pub children: Vec<Node>,
}

/// One element of the layer tree: a container group or a paintable layer.
#[derive(Debug, Clone)]
pub enum Node {
    Group(Group),
    Layer(RasterLayer),
}

impl Node {
    /// Display name of the node. Not guaranteed unique and may contain
    /// filesystem-illegal characters.
    pub fn name(&self) -> &str {
        match self {
            Node::Group(group) => &group.name,
            Node::Layer(layer) => &layer.name,
        }
    }
}

/// A container node owning an ordered sequence of children.
#[derive(Debug, Clone)]
pub struct Group {
    pub name: String,
    pub visible: bool,
    /// Group opacity, 0-255.
    pub opacity: u8,
    pub children: Vec<Node>,
}

/// A terminal paintable layer.
#[derive(Debug, Clone)]
pub struct RasterLayer {
    /// Backend-assigned index used to look the layer up for compositing.
    pub id: usize,
    pub name: String,
    pub visible: bool,
    pub bounds: LayerBounds,
    /// Layer opacity, 0-255.
    pub opacity: u8,
    /// Blend-mode label, e.g. `Normal` or `Multiply`.
    pub blend_mode: String,
}

impl RasterLayer {
    /// Label recorded as the manifest `layer_type` field.
    pub fn kind_label(&self) -> &'static str {
        "RasterLayer"
    }
}

/// Bounding geometry of a layer within the document canvas.
///
/// `left`/`top` may be negative; layers can extend beyond the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerBounds {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl LayerBounds {
    /// A layer with no pixel area produces no bitmap when composited.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
