//! Spreadsheet workbook adapter.
//!
//! Workbooks are flattened into marker lines so that the positional diff
//! and the exporters can treat them like any other document:
//!
//! ```text
//! === WORKSHEET: Sheet1 ===
//! Row 1: A1:Name | B1:Amount
//! Row 2: A2:Widget | B2:3.5
//!
//! === WORKSHEET: Sheet2 ===
//! (Empty worksheet)
//! ```
//!
//! Any read or parse failure is caught here and converted into a 3-line
//! fallback sequence; a broken workbook degrades the comparison content but
//! never aborts the comparison itself.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use super::traits::{byte_size, display_name, AdapterError, FileKind, FormatAdapter};
use crate::model::LineSequence;

/// Marker prefix in front of each worksheet's rows
pub const WORKSHEET_MARKER: &str = "=== WORKSHEET:";
/// Marker prefix in front of each non-empty row
pub const ROW_MARKER: &str = "Row ";
/// Marker line emitted for a worksheet without content
pub const EMPTY_WORKSHEET_MARKER: &str = "(Empty worksheet)";

/// Adapter for xlsx/xls workbooks.
pub struct WorkbookAdapter;

impl FormatAdapter for WorkbookAdapter {
    fn adapt(&self, path: &Path) -> Result<LineSequence, AdapterError> {
        let lines = match read_workbook(path) {
            Ok(lines) => lines,
            Err(err) => {
                tracing::warn!("Workbook adapter degraded to fallback for {path:?}: {err}");
                fallback_lines(path, &err)
            }
        };
        Ok(LineSequence::new(
            display_name(path),
            FileKind::Workbook,
            lines,
        ))
    }

    fn kind(&self) -> FileKind {
        FileKind::Workbook
    }
}

/// Read a workbook into marker lines. Errors here never escape `adapt`.
fn read_workbook(path: &Path) -> Result<Vec<String>, AdapterError> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names().to_owned();

    let mut lines = Vec::new();
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{WORKSHEET_MARKER} {name} ==="));

        let range = workbook.worksheet_range(name)?;
        let start = range.start().unwrap_or((0, 0));
        let rows: Vec<&[Data]> = range.rows().collect();
        lines.extend(worksheet_lines(start, &rows));
    }
    Ok(lines)
}

/// Flatten one worksheet's used range into row marker lines.
///
/// `start` is the 0-based (row, column) offset of the used range; cell
/// references are rendered in spreadsheet coordinates (column letters plus
/// 1-based row number) and empty cells are left out entirely.
fn worksheet_lines(start: (u32, u32), rows: &[&[Data]]) -> Vec<String> {
    let (row_offset, col_offset) = start;
    let mut lines = Vec::new();

    for (r, row) in rows.iter().enumerate() {
        let row_number = row_offset as usize + r + 1;
        let mut cells = Vec::new();
        for (c, value) in row.iter().enumerate() {
            if matches!(value, Data::Empty) {
                continue;
            }
            let text = value.to_string();
            if text.is_empty() {
                continue;
            }
            let column = column_letters(col_offset as usize + c);
            cells.push(format!("{column}{row_number}:{text}"));
        }
        if !cells.is_empty() {
            lines.push(format!("{ROW_MARKER}{row_number}: {}", cells.join(" | ")));
        }
    }

    if lines.is_empty() {
        lines.push(EMPTY_WORKSHEET_MARKER.to_string());
    }
    lines
}

/// Spreadsheet column letters for a 0-based column index (0 -> A, 26 -> AA).
fn column_letters(mut index: usize) -> String {
    let mut letters = String::new();
    loop {
        letters.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters
}

/// The 3-line degraded sequence substituted for an unreadable workbook.
fn fallback_lines(path: &Path, err: &AdapterError) -> Vec<String> {
    vec![
        format!("Unable to process workbook: {err}"),
        format!("File name: {}", display_name(path)),
        format!("Size: {} bytes", byte_size(path)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(51), "AZ");
        assert_eq!(column_letters(52), "BA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
    }

    #[test]
    fn test_worksheet_lines_basic() {
        let rows: Vec<Vec<Data>> = vec![
            vec![Data::String("Name".into()), Data::String("Amount".into())],
            vec![Data::String("Widget".into()), Data::Float(3.5)],
        ];
        let rows: Vec<&[Data]> = rows.iter().map(Vec::as_slice).collect();
        let lines = worksheet_lines((0, 0), &rows);
        assert_eq!(lines, vec!["Row 1: A1:Name | B1:Amount", "Row 2: A2:Widget | B2:3.5"]);
    }

    #[test]
    fn test_worksheet_lines_skip_empty_cells_and_rows() {
        let rows: Vec<Vec<Data>> = vec![
            vec![Data::Empty, Data::String("b".into())],
            vec![Data::Empty, Data::Empty],
            vec![Data::String("c".into())],
        ];
        let rows: Vec<&[Data]> = rows.iter().map(Vec::as_slice).collect();
        let lines = worksheet_lines((0, 0), &rows);
        assert_eq!(lines, vec!["Row 1: B1:b", "Row 3: A3:c"]);
    }

    #[test]
    fn test_worksheet_lines_respect_used_range_offset() {
        // Used range starting at C5: cell refs and row numbers shift with it.
        let rows: Vec<Vec<Data>> = vec![vec![Data::String("x".into())]];
        let rows: Vec<&[Data]> = rows.iter().map(Vec::as_slice).collect();
        let lines = worksheet_lines((4, 2), &rows);
        assert_eq!(lines, vec!["Row 5: C5:x"]);
    }

    #[test]
    fn test_empty_worksheet_marker() {
        let lines = worksheet_lines((0, 0), &[]);
        assert_eq!(lines, vec![EMPTY_WORKSHEET_MARKER]);
    }

    #[test]
    fn test_broken_workbook_degrades_to_fallback() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        write!(file, "this is not a zip archive").unwrap();

        let seq = WorkbookAdapter.adapt(file.path()).unwrap();
        assert_eq!(seq.lines.len(), 3);
        assert!(seq.lines[0].starts_with("Unable to process workbook:"));
        assert!(seq.lines[1].starts_with("File name:"));
        assert!(seq.lines[2].ends_with("bytes"));
    }
}
