//! PSD-backed imaging backend.
//!
//! All PSD binary parsing and pixel production is delegated to the `psd`
//! crate. This module only rebuilds the crate's flat group/layer collections
//! into the tree the traverser walks, and crops layer pixels to their bounds.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use image::RgbaImage;
use psd::{Psd, PsdGroup, PsdLayer};

use crate::backend::{Compositor, ImagingBackend, LoadedDocument};
use crate::document::{Document, Group, LayerBounds, Node, RasterLayer};
use crate::error::{Error, Result};

/// File extension identifying source documents in the input directory.
pub const SOURCE_EXTENSION: &str = "psd";

/// Imaging backend reading Photoshop documents via the `psd` crate.
#[derive(Debug, Default)]
pub struct PsdBackend;

impl PsdBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImagingBackend for PsdBackend {
    async fn open_document(&self, path: &Path) -> Result<LoadedDocument> {
        let name = document_name(path);
        let bytes = tokio::fs::read(path).await?;
        let psd = Psd::from_bytes(&bytes).map_err(|e| Error::Document {
            name: name.clone(),
            message: e.to_string(),
        })?;

        let document = build_document(name, &psd);
        Ok(LoadedDocument {
            document,
            compositor: Box::new(PsdCompositor { psd }),
        })
    }
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Rebuild the layer tree from the crate's flat group and layer collections.
///
/// Groups and layers are exposed as separate collections keyed by parent
/// group id, so the original interleaving of a group's mixed children is not
/// recoverable. Within each parent the order is stable: child groups in
/// ascending id order, then leaf layers in document order.
fn build_document(name: String, psd: &Psd) -> Document {
    let mut group_meta: HashMap<u32, GroupMeta> = HashMap::new();
    let mut subgroups: HashMap<Option<u32>, Vec<u32>> = HashMap::new();
    for (id, group) in psd.groups() {
        group_meta.insert(*id, GroupMeta::from_group(group));
        subgroups.entry(group.parent_id()).or_default().push(*id);
    }
    for ids in subgroups.values_mut() {
        ids.sort_unstable();
    }

    let mut layer_buckets: HashMap<Option<u32>, Vec<RasterLayer>> = HashMap::new();
    for (index, layer) in psd.layers().iter().enumerate() {
        layer_buckets
            .entry(layer.parent_id())
            .or_default()
            .push(raster_from(index, layer));
    }

    let children = assemble(None, &group_meta, &subgroups, &mut layer_buckets);
    Document {
        name,
        width: psd.width(),
        height: psd.height(),
        children,
    }
}

struct GroupMeta {
    name: String,
    visible: bool,
    opacity: u8,
}

impl GroupMeta {
    fn from_group(group: &PsdGroup) -> Self {
        Self {
            name: group.name().to_string(),
            visible: group.visible(),
            opacity: group.opacity(),
        }
    }
}

fn assemble(
    parent: Option<u32>,
    group_meta: &HashMap<u32, GroupMeta>,
    subgroups: &HashMap<Option<u32>, Vec<u32>>,
    layer_buckets: &mut HashMap<Option<u32>, Vec<RasterLayer>>,
) -> Vec<Node> {
    let mut nodes = Vec::new();

    if let Some(ids) = subgroups.get(&parent) {
        for id in ids {
            let Some(meta) = group_meta.get(id) else {
                continue;
            };
            let children = assemble(Some(*id), group_meta, subgroups, layer_buckets);
            nodes.push(Node::Group(Group {
                name: meta.name.clone(),
                visible: meta.visible,
                opacity: meta.opacity,
                children,
            }));
        }
    }

    if let Some(layers) = layer_buckets.remove(&parent) {
        nodes.extend(layers.into_iter().map(Node::Layer));
    }

    nodes
}

fn raster_from(index: usize, layer: &PsdLayer) -> RasterLayer {
    let left = layer.layer_left();
    let top = layer.layer_top();
    let width = (i64::from(layer.layer_right()) - i64::from(left)).max(0) as u32;
    let height = (i64::from(layer.layer_bottom()) - i64::from(top)).max(0) as u32;

    RasterLayer {
        id: index,
        name: layer.name().to_string(),
        visible: layer.visible(),
        bounds: LayerBounds {
            left,
            top,
            width,
            height,
        },
        opacity: layer.opacity(),
        blend_mode: format!("{:?}", layer.blend_mode()),
    }
}

/// Compositor over a parsed PSD document.
struct PsdCompositor {
    psd: Psd,
}

impl Compositor for PsdCompositor {
    fn composite(&self, layer: &RasterLayer) -> Result<Option<RgbaImage>> {
        if layer.bounds.is_empty() {
            return Ok(None);
        }

        let source = self.psd.layers().get(layer.id).ok_or_else(|| Error::Composite {
            layer: layer.name.clone(),
            message: format!("no source layer at index {}", layer.id),
        })?;

        let pixels = source.rgba();
        let bounds = layer.bounds;
        let canvas_w = self.psd.width() as usize;
        let canvas_h = self.psd.height() as usize;
        let layer_len = bounds.width as usize * bounds.height as usize * 4;

        // Layer pixels come back sized to the document canvas; crop them to
        // the layer bounds. A buffer already matching the bounds is used
        // directly.
        let image = if pixels.len() == canvas_w * canvas_h * 4 {
            crop_canvas(&pixels, canvas_w, canvas_h, bounds)
        } else if pixels.len() == layer_len {
            RgbaImage::from_raw(bounds.width, bounds.height, pixels)
        } else {
            None
        };

        let image = image.ok_or_else(|| Error::Composite {
            layer: layer.name.clone(),
            message: "pixel buffer does not match layer geometry".into(),
        })?;
        Ok(Some(image))
    }
}

/// Copy the rectangle described by `bounds` out of a canvas-sized RGBA
/// buffer. Regions outside the canvas stay transparent.
fn crop_canvas(
    pixels: &[u8],
    canvas_w: usize,
    canvas_h: usize,
    bounds: LayerBounds,
) -> Option<RgbaImage> {
    let width = bounds.width as usize;
    let height = bounds.height as usize;
    let mut out = vec![0u8; width * height * 4];

    for row in 0..height {
        let src_y = i64::from(bounds.top) + row as i64;
        if src_y < 0 || src_y >= canvas_h as i64 {
            continue;
        }

        let x0 = i64::from(bounds.left).max(0);
        let x1 = (i64::from(bounds.left) + width as i64).min(canvas_w as i64);
        if x0 >= x1 {
            continue;
        }

        let span = (x1 - x0) as usize * 4;
        let src_start = (src_y as usize * canvas_w + x0 as usize) * 4;
        let dst_start = (row * width + (x0 - i64::from(bounds.left)) as usize) * 4;
        out[dst_start..dst_start + span].copy_from_slice(&pixels[src_start..src_start + span]);
    }

    RgbaImage::from_raw(bounds.width, bounds.height, out)
}
