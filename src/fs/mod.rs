//! Filesystem module.
//!
//! Provides:
//! - Name and path sanitization
//! - Flattened filename synthesis
//! - Output directory management

pub mod naming;
pub mod paths;

pub use naming::{flatten_path, layer_filename, sanitize_name, sanitize_path};
pub use paths::{ensure_dir, manifest_path, MANIFEST_FILENAME};
