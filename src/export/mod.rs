//! Export module for the layer pipeline.
//!
//! This module provides:
//! - Batch orchestration over an input directory
//! - Recursive layer tree traversal
//! - Single-layer export
//! - Export state tracking

pub mod batch;
pub mod layer;
pub mod state;
pub mod traverse;

pub use batch::{run_batch, BatchReport};
pub use layer::export_layer;
pub use state::{BatchState, ExportState};
pub use traverse::{traverse_document, ExportContext};
