//! Report generation for comparison results.
//!
//! Three output formats are supported:
//! - Summary: compact colored terminal output
//! - JSON: the portable report schema (summary, both line sequences,
//!   differences, timestamp)
//! - Workbook: a multi-sheet xlsx document, available for tabular-origin
//!   comparisons only
//!
//! [`export_report`] is the one-stop export entry point: it picks JSON or
//! workbook output by scanning the normalized lines for worksheet markers
//! and also suggests a report filename.

mod json;
mod summary;
mod workbook;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use workbook::WorkbookReporter;

use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::{ROW_MARKER, WORKSHEET_MARKER};
use crate::model::ComparisonResult;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Output format not supported for this comparison: {0}")]
    UnsupportedFormat(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(err.to_string())
    }
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Auto-detect from the output file extension, summary otherwise
    #[default]
    Auto,
    /// Brief summary output for the terminal
    Summary,
    /// Structured JSON report
    Json,
    /// Multi-sheet xlsx report (tabular-origin comparisons only)
    Workbook,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Workbook => write!(f, "workbook"),
        }
    }
}

/// A generated report, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutput {
    /// Textual report (summary, JSON)
    Text(String),
    /// Binary report (xlsx workbook)
    Binary(Vec<u8>),
}

impl ReportOutput {
    /// Byte view of the report regardless of flavor
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Binary(b) => b,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a comparison result
    fn generate(&self, result: &ComparisonResult) -> Result<ReportOutput, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;

    /// File extension for reports of this format, without the dot
    fn file_extension(&self) -> &'static str;
}

/// Create a report generator for the given format.
///
/// `Auto` resolves to the summary reporter; callers that want file-based
/// auto-detection should resolve the format first (see `pipeline::output`).
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Workbook => Box::new(WorkbookReporter::new()),
    }
}

/// Check whether a comparison originated from tabular/spreadsheet content.
///
/// Detection scans both normalized line sequences for the worksheet and row
/// markers the workbook adapter emits, so it also recognizes results that
/// were deserialized without their `source_kind` hint.
#[must_use]
pub fn is_tabular_origin(result: &ComparisonResult) -> bool {
    result
        .left_content
        .lines
        .iter()
        .chain(result.right_content.lines.iter())
        .any(|line| line.starts_with(WORKSHEET_MARKER) || line.starts_with(ROW_MARKER))
}

/// Export a comparison as a portable report document.
///
/// Tabular-origin results become a multi-sheet workbook; everything else
/// becomes the JSON report. Returns the document together with a suggested
/// filename stamped with the current local time.
pub fn export_report(result: &ComparisonResult) -> Result<(ReportOutput, String), ReportError> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    if is_tabular_origin(result) {
        let output = WorkbookReporter::new().generate(result)?;
        Ok((output, format!("comparison-report-{stamp}.xlsx")))
    } else {
        let output = JsonReporter::new().generate(result)?;
        Ok((output, format!("comparison-report-{stamp}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FileKind;
    use crate::diff::{diff_lines, Summary};
    use crate::model::LineSequence;

    fn result_with_lines(lines: &[&str]) -> ComparisonResult {
        let seq = LineSequence::new(
            "a.txt",
            FileKind::Text,
            lines.iter().map(ToString::to_string).collect(),
        );
        ComparisonResult::new(seq.clone(), seq, Vec::new(), Summary::default())
    }

    #[test]
    fn test_tabular_origin_detection() {
        assert!(!is_tabular_origin(&result_with_lines(&["plain", "text"])));
        assert!(is_tabular_origin(&result_with_lines(&[
            "=== WORKSHEET: Sheet1 ===",
            "Row 1: A1:x",
        ])));
        assert!(is_tabular_origin(&result_with_lines(&["Row 3: B3:y"])));
    }

    #[test]
    fn test_export_report_picks_json_for_text() {
        let left = LineSequence::new("a.txt", FileKind::Text, vec!["x".into()]);
        let right = LineSequence::new("b.txt", FileKind::Text, vec!["y".into()]);
        let (diffs, summary) = diff_lines(&left, &right);
        let result = ComparisonResult::new(left, right, diffs, summary);

        let (output, name) = export_report(&result).unwrap();
        assert!(matches!(output, ReportOutput::Text(_)));
        assert!(name.starts_with("comparison-report-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_export_report_picks_workbook_for_tabular() {
        let result = result_with_lines(&["=== WORKSHEET: Data ===", "Row 1: A1:v"]);
        let (output, name) = export_report(&result).unwrap();
        assert!(matches!(output, ReportOutput::Binary(_)));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(
            create_reporter(ReportFormat::Json, true).format(),
            ReportFormat::Json
        );
        assert_eq!(
            create_reporter(ReportFormat::Workbook, true).format(),
            ReportFormat::Workbook
        );
        assert_eq!(
            create_reporter(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }
}
