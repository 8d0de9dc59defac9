//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the manifest file written into the output directory.
pub const MANIFEST_FILENAME: &str = "config.json";

/// Get the manifest path inside an output directory.
pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILENAME)
}

/// Ensure a directory exists, creating it (and parents) if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
