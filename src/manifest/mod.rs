//! Batch manifest accumulation and serialization.
//!
//! The manifest maps each source document name to the ordered list of layers
//! exported from it. It is append-only for the duration of a batch run and
//! serialized to disk exactly once, after every document has been processed.

pub mod record;

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

pub use record::{ExportRecord, Position};

/// Append-only mapping from document name to exported-layer records.
///
/// Document keys appear in first-append order; records within a document
/// appear in traversal order. A document that exports no layers never gets
/// a key.
#[derive(Debug, Default)]
pub struct Manifest {
    documents: Vec<(String, Vec<ExportRecord>)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under `document`, creating the entry if absent.
    pub fn push(&mut self, document: &str, record: ExportRecord) {
        self.records_for(document).push(record);
    }

    /// Ordered records for a document, creating the entry if absent.
    pub fn records_for(&mut self, document: &str) -> &mut Vec<ExportRecord> {
        let idx = match self.documents.iter().position(|(name, _)| name == document) {
            Some(idx) => idx,
            None => {
                self.documents.push((document.to_string(), Vec::new()));
                self.documents.len() - 1
            }
        };
        &mut self.documents[idx].1
    }

    /// Records for a document, if any were appended.
    pub fn get(&self, document: &str) -> Option<&[ExportRecord]> {
        self.documents
            .iter()
            .find(|(name, _)| name == document)
            .map(|(_, records)| records.as_slice())
    }

    /// Number of documents with at least one record.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document names in first-append order.
    pub fn document_names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|(name, _)| name.as_str())
    }

    /// Total record count across all documents.
    pub fn record_count(&self) -> usize {
        self.documents.iter().map(|(_, records)| records.len()).sum()
    }

    /// Serialize the manifest to `path` as pretty-printed UTF-8 JSON.
    ///
    /// Non-ASCII names are written literally, not escaped. An existing file
    /// is overwritten.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Serialize for Manifest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.documents.len()))?;
        for (name, records) in &self.documents {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}
