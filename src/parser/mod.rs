//! Locating and parsing calendar JSON documents

pub mod directory;
pub mod filter;

use std::path::Path;

use serde_json::Value;

use crate::error::{ScanError, ScanResult};

pub use directory::{find_json_files, JsonFileListing};

/// Read a file fully and parse it as a single JSON value.
///
/// The file must be UTF-8; the three failure modes (read, decode, parse) map to
/// distinct `ScanError` variants.
pub fn parse_document(path: &Path) -> ScanResult<Value> {
    let bytes = std::fs::read(path).map_err(|e| ScanError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| ScanError::encoding(path, e))?;
    parse_document_str(path, &content)
}

/// Parse already-loaded document text, attributing errors to `path`
pub fn parse_document_str(path: &Path, content: &str) -> ScanResult<Value> {
    serde_json::from_str(content).map_err(|e| ScanError::json_parse(path, &e))
}
