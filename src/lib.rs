//! Care-calendar field inventory
//!
//! Walks a directory of calendar JSON documents, collects every distinct value seen
//! at every field path along with all monthly task labels, and renders a plain-text
//! reference report.

pub mod collector;
pub mod error;
pub mod parser;
pub mod report;

// Re-export commonly used types
pub use collector::{
    collect_document, scan_directory, DocumentFields, FieldInventory, ScanConfig, ScanSummary,
};
pub use error::{ScanError, ScanResult};
pub use report::{render_report, ReportFormatter};

/// Scan `config.root` and render the report in one step
pub fn scan_and_report(config: &ScanConfig) -> ScanResult<String> {
    let summary = scan_directory(config)?;
    Ok(ReportFormatter::new(&summary.inventory, summary.files_processed, config).to_string())
}
