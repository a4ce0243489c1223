use std::fs;
use std::path::Path;

use assert_matches::assert_matches;
use calfields::{scan_and_report, scan_directory, ScanConfig, ScanError};
use tempfile::TempDir;

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_recurses_into_subdirectories() {
    let td = TempDir::new().unwrap();
    write(td.path(), "roses/peace.json", r#"{"family": "Rosaceae"}"#);
    write(td.path(), "bulbs/spring/tulip.json", r#"{"family": "Liliaceae"}"#);
    write(td.path(), "bulbs/notes.txt", r#"{"family": "Ignored"}"#);

    let summary = scan_directory(&ScanConfig::with_root(td.path())).unwrap();

    assert_eq!(summary.files_processed, 2);
    let families: Vec<_> = summary.inventory.values["family"].iter().cloned().collect();
    assert_eq!(families, vec!["Liliaceae", "Rosaceae"]);
}

#[test]
fn test_global_config_contributes_nothing() {
    let td = TempDir::new().unwrap();
    write(td.path(), "rose.json", r#"{"name": "rose"}"#);
    write(
        td.path(),
        "global-config.json",
        r#"{"name": "global", "care_calendar": {"monthly_tasks": {"May": ["secret"]}}}"#,
    );
    write(
        td.path(),
        "nested/deeper/global-config.json",
        r#"{"theme": "dark"}"#,
    );

    let summary = scan_directory(&ScanConfig::with_root(td.path())).unwrap();

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_excluded, 2);
    assert!(summary.inventory.tasks.is_empty());
    assert!(!summary.inventory.values.contains_key("theme"));
    assert_eq!(summary.inventory.values["name"].len(), 1);
}

#[test]
fn test_malformed_file_not_counted_and_scan_continues() {
    let td = TempDir::new().unwrap();
    write(td.path(), "a.json", r#"{"name": "first"}"#);
    write(td.path(), "b.json", r#"{"name": "broken", "#);
    write(td.path(), "c.json", r#"{"name": "third"}"#);
    fs::write(td.path().join("d.json"), [0xff, 0xfe, 0x00]).unwrap();

    let summary = scan_directory(&ScanConfig::with_root(td.path())).unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.files_failed, 2);
    let names: Vec<_> = summary.inventory.values["name"].iter().cloned().collect();
    assert_eq!(names, vec!["first", "third"]);
}

#[test]
fn test_progress_interval_does_not_affect_results() {
    let td = TempDir::new().unwrap();
    for i in 0..45 {
        write(td.path(), &format!("plant_{i:02}.json"), &format!(r#"{{"id": {i}}}"#));
    }

    let config = ScanConfig::with_root(td.path());
    let summary = scan_directory(&config).unwrap();

    assert_eq!(summary.files_processed, 45);
    assert_eq!(summary.inventory.values["id"].len(), 45);
}

#[test]
fn test_missing_root_produces_no_report() {
    let td = TempDir::new().unwrap();
    let config = ScanConfig::with_root(td.path().join("calendar"));

    assert_matches!(scan_and_report(&config), Err(ScanError::RootNotFound { .. }));
}

#[test]
fn test_scan_and_report() {
    let td = TempDir::new().unwrap();
    write(
        td.path(),
        "herbs/basil.json",
        r#"{"key": "basil", "care_calendar": {"monthly_tasks": {"July": ["pinch"]}}}"#,
    );

    let report = scan_and_report(&ScanConfig::with_root(td.path())).unwrap();

    assert!(report.starts_with("Analyzed 1 JSON files\n"));
    assert!(report.contains("  - pinch\n"));
    assert!(report.contains("\n--- CARE_CALENDAR ---\n"));
    assert!(!report.contains("\nkey:"));
}

#[test]
fn test_scalar_document_adds_no_fields() {
    let td = TempDir::new().unwrap();
    write(td.path(), "lonely.json", r#""lonely""#);
    write(td.path(), "list.json", r#"["loose", 3]"#);

    let summary = scan_directory(&ScanConfig::with_root(td.path())).unwrap();
    let report = scan_and_report(&ScanConfig::with_root(td.path())).unwrap();

    assert_eq!(summary.files_processed, 2);
    let root_values: Vec<_> = summary.inventory.values[""].iter().cloned().collect();
    assert_eq!(root_values, vec!["3", "loose"]);
    assert!(!report.contains("lonely"));
}

#[test]
fn test_directory_named_json_counts_as_failure() {
    let td = TempDir::new().unwrap();
    write(td.path(), "archive.json/rose.json", r#"{"name": "rose"}"#);

    let summary = scan_directory(&ScanConfig::with_root(td.path())).unwrap();

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_failed, 1);
}
