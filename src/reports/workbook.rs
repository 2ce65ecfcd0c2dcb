//! Multi-sheet xlsx report generator.
//!
//! Available for tabular-origin comparisons only. The workbook layout is a
//! compatibility surface: a `Summary` sheet (title, generation timestamp,
//! four labeled counts) and a `Differences` sheet with one row per entry,
//! modified rows rendered as two-part rich text for readability. Column
//! widths are fixed rather than fitted to content.

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::{is_tabular_origin, ReportError, ReportFormat, ReportGenerator, ReportOutput};
use crate::diff::{DiffEntry, DiffKind};
use crate::model::ComparisonResult;

const LINE_COL_WIDTH: f64 = 8.0;
const TYPE_COL_WIDTH: f64 = 12.0;
const TEXT_COL_WIDTH: f64 = 60.0;

/// Workbook (xlsx) report generator
pub struct WorkbookReporter;

impl WorkbookReporter {
    /// Create a new workbook reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WorkbookReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for WorkbookReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<ReportOutput, ReportError> {
        if !is_tabular_origin(result) {
            return Err(ReportError::UnsupportedFormat(
                "workbook reports require a tabular-origin comparison".to_string(),
            ));
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        {
            let summary_sheet = workbook.add_worksheet();
            summary_sheet.set_name("Summary")?;
            write_summary_sheet(summary_sheet, result, &header_format)?;
        }

        {
            let differences_sheet = workbook.add_worksheet();
            differences_sheet.set_name("Differences")?;
            write_differences_sheet(differences_sheet, &result.differences, &header_format)?;
        }

        let bytes = workbook.save_to_buffer()?;
        Ok(ReportOutput::Binary(bytes))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Workbook
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }
}

/// Six rows: title, timestamp, and the four summary counts.
fn write_summary_sheet(
    sheet: &mut Worksheet,
    result: &ComparisonResult,
    header_format: &Format,
) -> Result<(), XlsxError> {
    sheet.set_column_width(0, 24.0)?;
    sheet.set_column_width(1, 28.0)?;

    sheet.write_string_with_format(0, 0, "File Comparison Report", header_format)?;
    sheet.write_string(1, 0, "Generated")?;
    sheet.write_string(1, 1, &Local::now().format("%Y-%m-%d %H:%M:%S").to_string())?;

    let summary = &result.summary;
    let counts = [
        ("Total Changes", summary.total_changes),
        ("Additions", summary.additions),
        ("Deletions", summary.deletions),
        ("Modifications", summary.modifications),
    ];
    for (i, (label, count)) in counts.iter().enumerate() {
        let row = 2 + i as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_number(row, 1, *count as f64)?;
    }
    Ok(())
}

/// Header row plus one data row per entry, with 1-based line numbers.
fn write_differences_sheet(
    sheet: &mut Worksheet,
    differences: &[DiffEntry],
    header_format: &Format,
) -> Result<(), XlsxError> {
    sheet.set_column_width(0, LINE_COL_WIDTH)?;
    sheet.set_column_width(1, TYPE_COL_WIDTH)?;
    sheet.set_column_width(2, TEXT_COL_WIDTH)?;
    sheet.set_column_width(3, TEXT_COL_WIDTH)?;

    sheet.write_string_with_format(0, 0, "Line", header_format)?;
    sheet.write_string_with_format(0, 1, "Type", header_format)?;
    sheet.write_string_with_format(0, 2, "Original Text", header_format)?;
    sheet.write_string_with_format(0, 3, "Modified Text", header_format)?;

    let label_format = Format::new().set_bold();
    let plain_format = Format::default();

    for (i, entry) in differences.iter().enumerate() {
        let row = 1 + i as u32;
        sheet.write_number(row, 0, (entry.line + 1) as f64)?;
        sheet.write_string(row, 1, kind_label(entry.kind))?;

        let left = entry.left_text.as_deref().unwrap_or("");
        let right = entry.right_text.as_deref().unwrap_or("");

        if entry.kind == DiffKind::Modified {
            // Modified entries carry both sides; label each segment so the
            // cell reads on its own when copied out of the sheet.
            sheet.write_rich_string(
                row,
                2,
                &[(&label_format, "Original: "), (&plain_format, left)],
            )?;
            sheet.write_rich_string(
                row,
                3,
                &[(&label_format, "Modified: "), (&plain_format, right)],
            )?;
        } else {
            sheet.write_string(row, 2, left)?;
            sheet.write_string(row, 3, right)?;
        }
    }
    Ok(())
}

/// Stable lowercase labels matching the JSON report's `kind` values.
const fn kind_label(kind: DiffKind) -> &'static str {
    match kind {
        DiffKind::Added => "added",
        DiffKind::Removed => "removed",
        DiffKind::Modified => "modified",
    }
}
