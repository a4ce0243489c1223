//! Field and task collection over parsed calendar documents
//!
//! Two independent passes run over every document: one records each scalar leaf
//! under its dot-joined key path, the other gathers task labels from
//! `care_calendar.monthly_tasks` wherever it appears.

pub mod batch;
pub mod config;

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tracing::debug;

pub use batch::{scan_directory, ScanSummary};
pub use config::ScanConfig;

/// Path -> distinct stringified scalar values seen at that path
pub type ValueSetIndex = BTreeMap<String, BTreeSet<String>>;

/// Distinct monthly task labels
pub type TaskSet = BTreeSet<String>;

const CARE_CALENDAR_KEY: &str = "care_calendar";
const MONTHLY_TASKS_KEY: &str = "monthly_tasks";

/// Fields and tasks collected from a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFields {
    pub values: ValueSetIndex,
    pub tasks: TaskSet,
}

/// Run both collection passes over one parsed document
pub fn collect_document(document: &Value) -> DocumentFields {
    let mut fields = DocumentFields::default();
    collect_values(document, "", &mut fields.values);
    collect_tasks(document, &mut fields.tasks);
    fields
}

/// Record every scalar leaf under its dot-joined path. Arrays do not add a segment.
///
/// Leaves are recorded by their enclosing object or array, so a bare scalar passed
/// in directly contributes nothing.
pub fn collect_values(value: &Value, prefix: &str, index: &mut ValueSetIndex) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                record(child, &path, index);
            }
        }
        Value::Array(items) => {
            for item in items {
                record(item, prefix, index);
            }
        }
        _ => {}
    }
}

fn record(value: &Value, path: &str, index: &mut ValueSetIndex) {
    if value.is_object() || value.is_array() {
        collect_values(value, path, index);
    } else {
        index
            .entry(path.to_string())
            .or_default()
            .insert(scalar_text(value));
    }
}

/// Collect task labels from every `care_calendar.monthly_tasks` object in the document,
/// at any depth
pub fn collect_tasks(value: &Value, tasks: &mut TaskSet) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(calendar)) = map.get(CARE_CALENDAR_KEY) {
                collect_monthly_tasks(calendar, tasks);
            }
            for child in map.values() {
                collect_tasks(child, tasks);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_tasks(item, tasks);
            }
        }
        _ => {}
    }
}

fn collect_monthly_tasks(calendar: &Map<String, Value>, tasks: &mut TaskSet) {
    let months = match calendar.get(MONTHLY_TASKS_KEY) {
        Some(Value::Object(months)) => months,
        Some(other) => {
            debug!(kind = value_kind(other), "monthly_tasks is not an object");
            return;
        }
        None => return,
    };

    for (month, entries) in months {
        let Value::Array(entries) = entries else {
            debug!(month = %month, "monthly task entry is not an array");
            continue;
        };
        for entry in entries {
            match entry {
                Value::String(task) => {
                    tasks.insert(task.clone());
                }
                other => {
                    debug!(month = %month, kind = value_kind(other), "skipping non-string task")
                }
            }
        }
    }
}

/// Text form of a scalar: strings verbatim, everything else as canonical JSON
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Corpus-wide accumulators built up one document at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInventory {
    pub values: ValueSetIndex,
    pub tasks: TaskSet,
}

impl FieldInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's fields. Set union, so order of merging never matters.
    pub fn merge(&mut self, fields: DocumentFields) {
        for (path, values) in fields.values {
            self.values.entry(path).or_default().extend(values);
        }
        self.tasks.extend(fields.tasks);
    }

    pub fn add_document(&mut self, document: &Value) {
        self.merge(collect_document(document));
    }

    pub fn path_count(&self) -> usize {
        self.values.len()
    }

    pub fn values_at(&self, path: &str) -> Option<&BTreeSet<String>> {
        self.values.get(path)
    }
}
