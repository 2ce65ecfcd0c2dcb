//! Plain-text adapter — also the fallback for unknown extensions.

use std::path::Path;

use super::traits::{display_name, AdapterError, FileKind, FormatAdapter};
use crate::model::LineSequence;

/// Adapter that splits a file on the newline terminator.
pub struct TextAdapter;

impl FormatAdapter for TextAdapter {
    fn adapt(&self, path: &Path) -> Result<LineSequence, AdapterError> {
        let bytes = std::fs::read(path)?;
        // Undecodable bytes degrade to replacement characters instead of
        // failing the whole comparison.
        let text = String::from_utf8_lossy(&bytes);
        let lines = split_lines(&text);
        Ok(LineSequence::new(display_name(path), FileKind::Text, lines))
    }

    fn kind(&self) -> FileKind {
        FileKind::Text
    }
}

/// Split on `'\n'` with the terminator's own semantics: empty input yields
/// a single empty line, and a trailing newline yields a trailing empty line.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(ToString::to_string).collect()
}
