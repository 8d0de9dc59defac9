//! Batch orchestration over an input directory of source documents.

use std::path::{Path, PathBuf};

use crate::backend::{ImagingBackend, SOURCE_EXTENSION};
use crate::config::Config;
use crate::error::Result;
use crate::export::state::{BatchState, ExportState};
use crate::export::traverse::{traverse_document, ExportContext};
use crate::fs::{ensure_dir, manifest_path};
use crate::manifest::Manifest;

/// Outcome of a completed batch run, returned to the caller after the
/// manifest has been written.
#[derive(Debug)]
pub struct BatchReport {
    pub manifest: Manifest,
    pub stats: BatchState,
    /// Per-document export states, in processing order.
    pub documents: Vec<ExportState>,
}

/// Process every source document in the configured input directory, strictly
/// one after another, then write the manifest into the output directory.
///
/// The first error aborts the whole batch: remaining documents are not
/// processed and no manifest file is written. Previously exported PNG files
/// stay on disk.
pub async fn run_batch(config: &Config, backend: &dyn ImagingBackend) -> Result<BatchReport> {
    let output_dir = config.output_dir();
    ensure_dir(&output_dir)?;

    let mut manifest = Manifest::new();
    let mut stats = BatchState::default();
    let mut documents = Vec::new();

    for path in list_source_documents(&config.input_dir())? {
        let state = process_document(&path, &output_dir, config, backend, &mut manifest).await?;
        tracing::info!(
            "Exported {} layers from {} ({} skipped)",
            state.layers_exported,
            state.document_name,
            state.total_skipped()
        );
        stats.add_document_stats(&state);
        documents.push(state);
    }

    manifest.write_to(&manifest_path(&output_dir))?;

    Ok(BatchReport {
        manifest,
        stats,
        documents,
    })
}

/// Entries of `dir` whose extension marks them as source documents, in
/// filesystem enumeration order (deliberately not sorted).
fn list_source_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION) {
            documents.push(path);
        }
    }
    Ok(documents)
}

/// Open one document and run the full traversal over its layer tree.
async fn process_document(
    path: &Path,
    output_dir: &Path,
    config: &Config,
    backend: &dyn ImagingBackend,
    manifest: &mut Manifest,
) -> Result<ExportState> {
    tracing::info!("Processing {}", path.display());
    let loaded = backend.open_document(path).await?;
    let document = loaded.document;

    let ctx = ExportContext {
        document_name: &document.name,
        output_dir,
        compositor: loaded.compositor.as_ref(),
        options: &config.options,
    };
    let mut state = ExportState::new(document.name.clone());
    traverse_document(&document, &ctx, manifest, &mut state)?;

    Ok(state)
}
