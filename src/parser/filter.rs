use std::path::Path;

/// Return true if the path has a .json extension. Existence is not checked; reading
/// the path reports anything that is not a readable file.
pub fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Return true if the file's base name matches one of the excluded names exactly
pub fn is_excluded(path: &Path, excluded_names: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| excluded_names.iter().any(|excluded| excluded == name))
}
