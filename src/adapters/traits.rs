//! Adapter trait definitions and error types.
//!
//! Every supported input format has one adapter that turns a file into the
//! canonical [`LineSequence`]. Adapter selection is a closed mapping from
//! [`FileKind`] to adapter — unknown extensions fall back to the plain-text
//! kind, so `adapt` never fails on an unrecognized format alone.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::model::LineSequence;

/// Errors that can occur while adapting an input file.
///
/// Only some of these are fatal to a comparison: workbook errors are caught
/// inside the workbook adapter and degraded to fallback content, while CSV
/// and IO errors propagate to the caller.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("CSV parse error: {0}")]
    Csv(String),

    #[error("Workbook error: {0}")]
    Workbook(String),
}

impl From<std::io::Error> for AdapterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for AdapterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<calamine::Error> for AdapterError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook(err.to_string())
    }
}

/// Closed enumeration of supported input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Plain text — also the fallback for unknown extensions
    Text,
    /// Delimited tabular text (CSV)
    Delimited,
    /// Spreadsheet workbook (xlsx/xls)
    Workbook,
    /// Word-processor document (placeholder extraction)
    WordProcessor,
    /// PDF document (placeholder extraction)
    Pdf,
    /// Raster image (metadata only)
    Image,
}

impl FileKind {
    /// Classify a file by its extension.
    ///
    /// The mapping is deliberately static; anything unrecognized is treated
    /// as plain text rather than rejected.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Self::Delimited,
            "xlsx" | "xls" => Self::Workbook,
            "docx" | "doc" => Self::WordProcessor,
            "pdf" => Self::Pdf,
            "jpg" | "jpeg" | "png" | "gif" => Self::Image,
            _ => Self::Text,
        }
    }
}

/// Trait for format adapters.
///
/// Implementors read one file and produce its canonical line sequence.
/// Reads are plain blocking I/O; the two sides of a comparison have no
/// ordering dependency on each other.
pub trait FormatAdapter {
    /// Adapt a file into its canonical line sequence
    fn adapt(&self, path: &Path) -> Result<LineSequence, AdapterError>;

    /// The input kind this adapter handles
    fn kind(&self) -> FileKind;
}

/// File name portion of a path, for fallback and metadata lines
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Byte size of a file, zero when unavailable
#[must_use]
pub fn byte_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
