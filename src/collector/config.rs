//! Configuration options for a calendar scan

use std::path::PathBuf;

use crate::error::{ScanError, ScanResult};

/// Default location of the calendar dataset
pub const DEFAULT_CALENDAR_DIR: &str = "public/data/calendar";

/// Shared settings file that is never treated as a calendar document
pub const GLOBAL_CONFIG_FILE: &str = "global-config.json";

/// Scan configuration options
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory walked recursively for `.json` files
    pub root: PathBuf,
    /// File base names skipped unconditionally
    pub excluded_file_names: Vec<String>,
    /// Emit a progress notice after this many successfully processed files
    pub progress_interval: usize,
    /// Paths omitted from the field report when equal to one of these
    pub hidden_paths: Vec<String>,
    /// Paths omitted from the field report when starting with one of these
    pub hidden_path_prefixes: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_CALENDAR_DIR),
            excluded_file_names: vec![GLOBAL_CONFIG_FILE.to_string()],
            progress_interval: 20,
            hidden_paths: vec!["key".to_string()],
            hidden_path_prefixes: vec!["_meta".to_string()],
        }
    }
}

impl ScanConfig {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.progress_interval == 0 {
            return Err(ScanError::configuration(
                "progress interval must be at least 1",
            ));
        }
        Ok(())
    }

    /// True if `path` is tracked but left out of the printed field report
    pub fn is_hidden_path(&self, path: &str) -> bool {
        self.hidden_paths.iter().any(|hidden| hidden == path)
            || self
                .hidden_path_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }
}
