//! Document and layer tree model.

pub mod node;

pub use node::{Document, Group, LayerBounds, Node, RasterLayer};
