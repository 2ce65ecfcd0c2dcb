//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator, ReportOutput};
use crate::diff::DiffKind;
use crate::model::ComparisonResult;

/// How many difference entries the preview section shows before eliding
const PREVIEW_LIMIT: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<ReportOutput, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("File Comparison Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            result.left_content.name,
            result.right_content.name
        ));
        lines.push(format!(
            "{}  {} → {} lines",
            self.color("Size:", "cyan"),
            result.left_content.len(),
            result.right_content.len()
        ));
        lines.push(String::new());

        let summary = &result.summary;
        if !summary.has_changes() {
            lines.push(self.color("No differences found.", "green"));
            lines.push(String::new());
            return Ok(ReportOutput::Text(lines.join("\n")));
        }

        lines.push(format!(
            "{} {}",
            self.color("Changes:", "bold"),
            summary.total_changes
        ));
        lines.push(format!(
            "  {} added, {} removed, {} modified",
            self.color(&summary.additions.to_string(), "green"),
            self.color(&summary.deletions.to_string(), "red"),
            self.color(&summary.modifications.to_string(), "yellow"),
        ));
        lines.push(String::new());

        for entry in result.differences.iter().take(PREVIEW_LIMIT) {
            let line_no = entry.line + 1;
            match entry.kind {
                DiffKind::Added => lines.push(format!(
                    "  {} {}",
                    self.color(&format!("+{line_no}"), "green"),
                    entry.right_text.as_deref().unwrap_or("")
                )),
                DiffKind::Removed => lines.push(format!(
                    "  {} {}",
                    self.color(&format!("-{line_no}"), "red"),
                    entry.left_text.as_deref().unwrap_or("")
                )),
                DiffKind::Modified => lines.push(format!(
                    "  {} {} → {}",
                    self.color(&format!("~{line_no}"), "yellow"),
                    entry.left_text.as_deref().unwrap_or(""),
                    entry.right_text.as_deref().unwrap_or("")
                )),
            }
        }
        if result.differences.len() > PREVIEW_LIMIT {
            lines.push(self.color(
                &format!("  … {} more", result.differences.len() - PREVIEW_LIMIT),
                "dim",
            ));
        }
        lines.push(String::new());

        Ok(ReportOutput::Text(lines.join("\n")))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}
