//! Core data model for comparison results.
//!
//! Every input file, whatever its format, is normalized by an adapter into a
//! [`LineSequence`]: an ordered, 0-indexed list of text lines. Line indices
//! are the shared coordinate space of a comparison; lines are never
//! reordered. A completed comparison is captured in a [`ComparisonResult`],
//! an immutable value owned by whoever requested it.

use serde::{Deserialize, Serialize};

use crate::adapters::FileKind;
use crate::diff::{DiffEntry, Summary};

/// Canonical line representation of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSequence {
    /// File name the sequence was produced from
    pub name: String,
    /// Kind of adapter that produced the sequence
    pub kind: FileKind,
    /// Ordered lines, addressed by 0-based index
    pub lines: Vec<String>,
}

impl LineSequence {
    /// Create a line sequence from parts
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FileKind, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            lines,
        }
    }

    /// Number of lines in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the sequence holds no lines at all.
    ///
    /// Note that an empty *document* is not an empty sequence: the text
    /// adapter maps empty input to a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, or the empty string past the end.
    ///
    /// Positional comparison treats missing indices as empty lines, so this
    /// is the lookup the diff engine uses on both sides.
    #[must_use]
    pub fn line_or_empty(&self, index: usize) -> &str {
        self.lines.get(index).map_or("", String::as_str)
    }
}

/// Origin category of a comparison, derived from the two input kinds.
///
/// Workbook wins over delimited text, which wins over plain text; the
/// exporter uses this only as a hint — the authoritative tabular-origin
/// check scans the normalized lines for worksheet markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain or fallback text comparison
    Text,
    /// Delimited tabular text (CSV)
    Delimited,
    /// Spreadsheet workbook
    Workbook,
}

impl SourceKind {
    /// Derive the comparison origin from the two adapted inputs
    #[must_use]
    pub fn from_inputs(left: FileKind, right: FileKind) -> Self {
        if left == FileKind::Workbook || right == FileKind::Workbook {
            Self::Workbook
        } else if left == FileKind::Delimited || right == FileKind::Delimited {
            Self::Delimited
        } else {
            Self::Text
        }
    }
}

/// Complete result of one comparison request.
///
/// Produced once per request and never mutated afterwards; the CLI and the
/// exporters only ever borrow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct ComparisonResult {
    /// Origin category of the comparison
    pub source_kind: SourceKind,
    /// Normalized left ("original") input
    pub left_content: LineSequence,
    /// Normalized right ("modified") input
    pub right_content: LineSequence,
    /// Classified differences in increasing line-index order
    pub differences: Vec<DiffEntry>,
    /// Aggregate counts derived from `differences`
    pub summary: Summary,
}

impl ComparisonResult {
    /// Assemble a result from the two adapted inputs and the diff output
    pub fn new(
        left_content: LineSequence,
        right_content: LineSequence,
        differences: Vec<DiffEntry>,
        summary: Summary,
    ) -> Self {
        Self {
            source_kind: SourceKind::from_inputs(left_content.kind, right_content.kind),
            left_content,
            right_content,
            differences,
            summary,
        }
    }

    /// Check if the comparison found any differences
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.differences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_or_empty_past_end() {
        let seq = LineSequence::new("a.txt", FileKind::Text, vec!["one".into()]);
        assert_eq!(seq.line_or_empty(0), "one");
        assert_eq!(seq.line_or_empty(1), "");
        assert_eq!(seq.line_or_empty(99), "");
    }

    #[test]
    fn test_source_kind_precedence() {
        use FileKind::*;
        assert_eq!(SourceKind::from_inputs(Text, Text), SourceKind::Text);
        assert_eq!(
            SourceKind::from_inputs(Delimited, Text),
            SourceKind::Delimited
        );
        assert_eq!(
            SourceKind::from_inputs(Text, Workbook),
            SourceKind::Workbook
        );
        assert_eq!(
            SourceKind::from_inputs(Delimited, Workbook),
            SourceKind::Workbook
        );
    }

    #[test]
    fn test_empty_document_is_one_line_sequence() {
        let seq = LineSequence::new("empty.txt", FileKind::Text, vec![String::new()]);
        assert!(!seq.is_empty());
        assert_eq!(seq.len(), 1);
    }
}
