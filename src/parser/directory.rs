use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::parser::filter::{has_json_extension, is_excluded};

/// JSON files found under a root, plus what was skipped on the way
#[derive(Debug, Default)]
pub struct JsonFileListing {
    pub files: Vec<PathBuf>,
    pub excluded: Vec<PathBuf>,
    pub walk_errors: Vec<ScanError>,
}

/// Find `*.json` entries recursively under `dir`, skipping excluded base names.
///
/// Any entry with the extension is listed except the root itself, including
/// directories and dangling symlinks named `*.json`; reading them fails later and is
/// reported per file. Entries the walker cannot read are collected in `walk_errors`
/// rather than aborting the listing.
pub fn find_json_files(dir: &Path, excluded_names: &[String]) -> JsonFileListing {
    let mut listing = JsonFileListing::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                listing.walk_errors.push(e.into());
                continue;
            }
        };
        let path = entry.path();
        if entry.depth() == 0 || !has_json_extension(path) {
            continue;
        }
        if is_excluded(path, excluded_names) {
            debug!(path = %path.display(), "skipping excluded file");
            listing.excluded.push(path.to_path_buf());
            continue;
        }
        listing.files.push(path.to_path_buf());
    }

    listing
}
