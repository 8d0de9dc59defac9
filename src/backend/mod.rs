//! Imaging backend interface.
//!
//! The exporter never parses PSD data or composites pixels itself; both are
//! delegated to a backend behind these traits. The production backend wraps
//! the `psd` crate; tests substitute in-memory fakes.

pub mod psd;

use std::path::Path;

use async_trait::async_trait;
use image::RgbaImage;

use crate::document::{Document, RasterLayer};
use crate::error::Result;

pub use self::psd::{PsdBackend, SOURCE_EXTENSION};

/// Opens source documents and hands back their layer tree plus a compositor
/// for the pixel data.
#[async_trait]
pub trait ImagingBackend: Send + Sync {
    /// Open the document at `path` and build its layer tree.
    async fn open_document(&self, path: &Path) -> Result<LoadedDocument>;
}

/// Produces the composited bitmap for a single layer.
pub trait Compositor: Send + Sync {
    /// Composite `layer` to a bitmap.
    ///
    /// Returns `Ok(None)` when the layer has no pixel area to export.
    fn composite(&self, layer: &RasterLayer) -> Result<Option<RgbaImage>>;
}

/// A document opened by a backend, paired with the compositor that can
/// produce its layers' pixels.
pub struct LoadedDocument {
    pub document: Document,
    pub compositor: Box<dyn Compositor>,
}
