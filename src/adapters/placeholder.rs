//! Placeholder adapters for formats without content extraction.
//!
//! Word-processor documents, PDFs and images are recognized but not parsed;
//! their adapters return fixed descriptive metadata lines instead of file
//! content. The contract is deliberate: a real extractor can later replace
//! any of these behind the same `adapt` signature without touching the diff
//! engine or the exporters.

use chrono::{DateTime, Local};
use std::path::Path;

use super::traits::{byte_size, display_name, AdapterError, FileKind, FormatAdapter};
use crate::model::LineSequence;

/// Placeholder adapter for docx/doc files.
pub struct WordProcessorAdapter;

impl FormatAdapter for WordProcessorAdapter {
    fn adapt(&self, path: &Path) -> Result<LineSequence, AdapterError> {
        let lines = vec![
            "Word document processing not fully implemented yet.".to_string(),
            format!("File name: {}", display_name(path)),
            format!("Size: {} bytes", byte_size(path)),
        ];
        Ok(LineSequence::new(
            display_name(path),
            FileKind::WordProcessor,
            lines,
        ))
    }

    fn kind(&self) -> FileKind {
        FileKind::WordProcessor
    }
}

/// Placeholder adapter for PDF files.
pub struct PdfAdapter;

impl FormatAdapter for PdfAdapter {
    fn adapt(&self, path: &Path) -> Result<LineSequence, AdapterError> {
        let lines = vec![
            "PDF processing not fully implemented yet.".to_string(),
            format!("File name: {}", display_name(path)),
            format!("Size: {} bytes", byte_size(path)),
        ];
        Ok(LineSequence::new(display_name(path), FileKind::Pdf, lines))
    }

    fn kind(&self) -> FileKind {
        FileKind::Pdf
    }
}

/// Metadata-only adapter for raster images.
pub struct ImageAdapter;

impl FormatAdapter for ImageAdapter {
    fn adapt(&self, path: &Path) -> Result<LineSequence, AdapterError> {
        let lines = vec![
            format!("Image file detected: {}", display_name(path)),
            format!("Size: {} bytes", byte_size(path)),
            format!("Type: {}", mime_type(path)),
            format!("Last modified: {}", modified_stamp(path)),
            "Note: Visual image comparison not yet implemented".to_string(),
        ];
        Ok(LineSequence::new(display_name(path), FileKind::Image, lines))
    }

    fn kind(&self) -> FileKind {
        FileKind::Image
    }
}

/// MIME type from the extension; the image kinds are a closed set.
fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Local-time modification stamp, or a marker when the filesystem has none.
fn modified_stamp(path: &Path) -> String {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t| {
            let stamp: DateTime<Local> = t.into();
            stamp.format("%Y-%m-%d %H:%M:%S").to_string()
        })
        .unwrap_or_else(|_| "(unknown)".to_string())
}
