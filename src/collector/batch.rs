use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::collector::{FieldInventory, ScanConfig};
use crate::error::{ScanError, ScanResult};
use crate::parser::{find_json_files, parse_document};

/// Outcome of scanning a calendar directory
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub inventory: FieldInventory,
    /// Documents parsed and merged
    pub files_processed: usize,
    /// Documents that could not be read or parsed
    pub files_failed: usize,
    /// Files skipped by name
    pub files_excluded: usize,
    pub elapsed: Duration,
}

/// Walk `config.root`, collecting fields from every JSON document.
///
/// Only a missing root (or invalid configuration) is an error; unreadable or
/// malformed files are logged and skipped.
pub fn scan_directory(config: &ScanConfig) -> ScanResult<ScanSummary> {
    config.validate()?;
    if !config.root.is_dir() {
        return Err(ScanError::root_not_found(&config.root));
    }

    let started = Instant::now();
    let listing = find_json_files(&config.root, &config.excluded_file_names);
    let mut summary = ScanSummary {
        files_excluded: listing.excluded.len(),
        ..ScanSummary::default()
    };

    for error in &listing.walk_errors {
        match error.path() {
            Some(path) => {
                warn!("Error processing {}: {}", path.display(), error.user_message())
            }
            None => warn!("Error processing entry: {}", error.user_message()),
        }
    }
    summary.files_failed += listing.walk_errors.len();

    for path in &listing.files {
        match scan_file(path, &mut summary.inventory) {
            Ok(()) => {
                summary.files_processed += 1;
                if summary.files_processed % config.progress_interval == 0 {
                    info!("Processed {} files...", summary.files_processed);
                }
            }
            Err(e) => {
                warn!("Error processing {}: {}", path.display(), e.user_message());
                summary.files_failed += 1;
            }
        }
    }

    summary.elapsed = started.elapsed();
    info!(
        processed = summary.files_processed,
        failed = summary.files_failed,
        excluded = summary.files_excluded,
        paths = summary.inventory.path_count(),
        tasks = summary.inventory.tasks.len(),
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "scan complete"
    );

    Ok(summary)
}

/// Parse one file and merge it. Nothing is merged unless parsing succeeds.
fn scan_file(path: &Path, inventory: &mut FieldInventory) -> ScanResult<()> {
    let document = parse_document(path)?;
    inventory.add_document(&document);
    Ok(())
}
