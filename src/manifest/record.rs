//! Exported-layer metadata records.

use serde::{Deserialize, Serialize};

use crate::document::RasterLayer;

/// Metadata for one exported layer.
///
/// Field order matches the manifest's JSON key order. Records are immutable
/// once appended to the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRecord {
    /// Display name of the layer, unsanitized.
    pub name: String,
    /// Flattened output filename relative to the output directory.
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub position: Position,
    /// Layer opacity, 0-255.
    pub opacity: u8,
    pub visible: bool,
    /// Name of the source document this layer came from.
    pub psd_source: String,
    pub blend_mode: String,
    pub layer_type: String,
}

/// Layer position within the document canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl ExportRecord {
    /// Build a record for a layer exported to `filename` from `source`.
    pub fn for_layer(layer: &RasterLayer, source: &str, filename: &str) -> Self {
        Self {
            name: layer.name.clone(),
            path: filename.to_string(),
            width: layer.bounds.width,
            height: layer.bounds.height,
            position: Position {
                x: layer.bounds.left,
                y: layer.bounds.top,
            },
            opacity: layer.opacity,
            visible: layer.visible,
            psd_source: source.to_string(),
            blend_mode: layer.blend_mode.clone(),
            layer_type: layer.kind_label().to_string(),
        }
    }
}
