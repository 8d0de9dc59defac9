//! PSD Exporter - batch PSD layer export with a JSON manifest
//!
//! This library walks every PSD document in an input directory, exports each
//! visible raster layer as an individual flattened PNG, and accumulates a
//! manifest describing the geometry and compositing metadata of every
//! exported layer.
//!
//! # Features
//!
//! - Recursive group traversal with flattened output filenames
//! - Filesystem-safe sanitization of layer and group names
//! - Hidden and empty layers excluded from output
//! - Ordered JSON manifest written once per batch run
//! - Pluggable imaging backend (PSD decoding and pixel production are
//!   delegated to the `psd` crate)
//!
//! # Example
//!
//! ```no_run
//! use psd_exporter::{run_batch, Config, PsdBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let backend = PsdBackend::new();
//!
//!     let report = run_batch(&config, &backend).await?;
//!     println!("exported {} layers", report.stats.layers_exported);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod fs;
pub mod manifest;
pub mod output;

// Re-exports for convenience
pub use backend::{Compositor, ImagingBackend, LoadedDocument, PsdBackend};
pub use config::Config;
pub use document::{Document, Group, LayerBounds, Node, RasterLayer};
pub use error::{Error, Result};
pub use export::{run_batch, BatchReport, BatchState, ExportState};
pub use manifest::{ExportRecord, Manifest};
