//! Export state tracking.

/// Per-document export state.
#[derive(Debug, Default)]
pub struct ExportState {
    /// Source document name.
    pub document_name: String,

    // Statistics
    pub layers_exported: u64,
    pub layers_skipped_hidden: u64,
    pub layers_skipped_empty: u64,
}

impl ExportState {
    /// Create a new export state for a document.
    pub fn new(document_name: String) -> Self {
        Self {
            document_name,
            ..Default::default()
        }
    }

    /// Record one exported layer.
    pub fn increment_exported(&mut self) {
        self.layers_exported += 1;
    }

    /// Record one layer skipped because it was hidden.
    pub fn increment_skipped_hidden(&mut self) {
        self.layers_skipped_hidden += 1;
    }

    /// Record one layer skipped because it had no pixel area.
    pub fn increment_skipped_empty(&mut self) {
        self.layers_skipped_empty += 1;
    }

    /// Total layers skipped for any reason.
    pub fn total_skipped(&self) -> u64 {
        self.layers_skipped_hidden + self.layers_skipped_empty
    }
}

/// Whole-run statistics across all documents.
#[derive(Debug, Default)]
pub struct BatchState {
    pub documents_processed: u64,
    pub layers_exported: u64,
    pub layers_skipped_hidden: u64,
    pub layers_skipped_empty: u64,
}

impl BatchState {
    /// Fold one document's statistics into the batch totals.
    pub fn add_document_stats(&mut self, state: &ExportState) {
        self.documents_processed += 1;
        self.layers_exported += state.layers_exported;
        self.layers_skipped_hidden += state.layers_skipped_hidden;
        self.layers_skipped_empty += state.layers_skipped_empty;
    }

    /// Total layers skipped for any reason.
    pub fn total_skipped(&self) -> u64 {
        self.layers_skipped_hidden + self.layers_skipped_empty
    }
}
