//! Text report of collected calendar fields
//!
//! Everything is printed from sorted sets, so the output depends only on what was
//! collected and never on the order files were visited.

use std::fmt;

use crate::collector::{FieldInventory, ScanConfig};

const BANNER_WIDTH: usize = 80;

/// Renders a `FieldInventory` as the plain-text field report
pub struct ReportFormatter<'a> {
    inventory: &'a FieldInventory,
    files_processed: usize,
    config: &'a ScanConfig,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(
        inventory: &'a FieldInventory,
        files_processed: usize,
        config: &'a ScanConfig,
    ) -> Self {
        Self {
            inventory,
            files_processed,
            config,
        }
    }

    fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{title}")?;
        writeln!(f, "{rule}")
    }

    fn write_tasks(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_banner(f, "MONTHLY TASKS (care_calendar.monthly_tasks)")?;
        for task in &self.inventory.tasks {
            writeln!(f, "  - {task}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total unique monthly tasks: {}",
            self.inventory.tasks.len()
        )
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_banner(f, "ALL DATA FIELDS AND VALUES")?;

        let mut current_section = "";
        for (path, values) in &self.inventory.values {
            if self.config.is_hidden_path(path) {
                continue;
            }

            let section = top_level_segment(path);
            if section != current_section {
                writeln!(f)?;
                writeln!(f, "--- {} ---", section.to_uppercase())?;
                current_section = section;
            }

            writeln!(f)?;
            writeln!(f, "{path}:")?;
            for value in values {
                writeln!(f, "  - {value}")?;
            }
            writeln!(f, "  Total: {} unique values", values.len())?;
        }
        Ok(())
    }
}

impl fmt::Display for ReportFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzed {} JSON files", self.files_processed)?;
        self.write_tasks(f)?;
        self.write_fields(f)
    }
}

/// Segment before the first `.`, or the whole path
fn top_level_segment(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}

/// Render the report using the default hidden-path rules
pub fn render_report(inventory: &FieldInventory, files_processed: usize) -> String {
    let config = ScanConfig::default();
    ReportFormatter::new(inventory, files_processed, &config).to_string()
}
