//! JSON report generator.
//!
//! The JSON schema is a compatibility surface: `summary`, `originalFile`
//! and `modifiedFile` as plain line arrays, `differences`, and an ISO-8601
//! generation timestamp.

use chrono::Utc;
use serde::Serialize;

use super::{ReportError, ReportFormat, ReportGenerator, ReportOutput};
use crate::diff::{DiffEntry, Summary};
use crate::model::ComparisonResult;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter (pretty printed by default)
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of the JSON report
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    summary: &'a Summary,
    original_file: &'a [String],
    modified_file: &'a [String],
    differences: &'a [DiffEntry],
    timestamp: String,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<ReportOutput, ReportError> {
        let report = JsonReport {
            summary: &result.summary,
            original_file: &result.left_content.lines,
            modified_file: &result.right_content.lines,
            differences: &result.differences,
            timestamp: Utc::now().to_rfc3339(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(ReportOutput::Text(json))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
