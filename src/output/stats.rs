//! Statistics reporting.

use console::style;

use crate::export::{BatchState, ExportState};

/// Print statistics for a single document.
pub fn print_document_stats(state: &ExportState) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", state.document_name)).bold()
    );
    println!("  Exported: {}", state.layers_exported);
    println!("  Hidden:   {} skipped", state.layers_skipped_hidden);
    println!("  Empty:    {} skipped", state.layers_skipped_empty);
}

/// Print statistics for the whole batch run.
pub fn print_batch_stats(state: &BatchState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Batch Statistics:").bold());
    println!("  Documents processed: {}", state.documents_processed);
    println!("  Layers exported:     {}", state.layers_exported);
    println!(
        "  Layers skipped:      {} ({} hidden, {} empty)",
        state.total_skipped(),
        state.layers_skipped_hidden,
        state.layers_skipped_empty
    );
    println!("{}", style("═".repeat(50)).dim());
}
