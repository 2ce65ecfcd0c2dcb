//! Diff result structures.

use serde::{Deserialize, Serialize};

/// Behavioral classification of one line index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Line exists only on the right side
    Added,
    /// Line exists only on the left side
    Removed,
    /// Both sides have a non-empty, unequal line
    Modified,
}

/// Classification of one token within a modified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordDiffKind {
    Added,
    Removed,
    Unchanged,
}

/// One classified token span of an intra-line word diff.
///
/// Tokens include whitespace runs, so concatenating the `text` of all spans
/// belonging to one side reconstructs that side's line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiffSpan {
    /// Span classification
    pub kind: WordDiffKind,
    /// Token text, whitespace runs included
    pub text: String,
}

impl WordDiffSpan {
    pub fn new(kind: WordDiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// True when the span belongs to the left side of the line
    #[must_use]
    pub fn is_left(&self) -> bool {
        matches!(self.kind, WordDiffKind::Removed | WordDiffKind::Unchanged)
    }

    /// True when the span belongs to the right side of the line
    #[must_use]
    pub fn is_right(&self) -> bool {
        matches!(self.kind, WordDiffKind::Added | WordDiffKind::Unchanged)
    }
}

/// One classified difference at a specific line index.
///
/// Exactly one of the following shapes holds:
/// added with `right_text` only, removed with `left_text` only, or modified
/// with both texts and a word diff. Indices where both sides are equal
/// (including both empty) produce no entry at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    /// 0-based line index, shared between both sequences
    pub line: usize,
    /// Classification at this index
    pub kind: DiffKind,
    /// Left-side text, present for removed and modified entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_text: Option<String>,
    /// Right-side text, present for added and modified entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_text: Option<String>,
    /// Token-level diff, present only for modified entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_diffs: Option<Vec<WordDiffSpan>>,
}

impl DiffEntry {
    /// Create an added entry (line exists only on the right)
    #[must_use]
    pub fn added(line: usize, right_text: impl Into<String>) -> Self {
        Self {
            line,
            kind: DiffKind::Added,
            left_text: None,
            right_text: Some(right_text.into()),
            word_diffs: None,
        }
    }

    /// Create a removed entry (line exists only on the left)
    #[must_use]
    pub fn removed(line: usize, left_text: impl Into<String>) -> Self {
        Self {
            line,
            kind: DiffKind::Removed,
            left_text: Some(left_text.into()),
            right_text: None,
            word_diffs: None,
        }
    }

    /// Create a modified entry with its populated word diff
    #[must_use]
    pub fn modified(
        line: usize,
        left_text: impl Into<String>,
        right_text: impl Into<String>,
        word_diffs: Vec<WordDiffSpan>,
    ) -> Self {
        Self {
            line,
            kind: DiffKind::Modified,
            left_text: Some(left_text.into()),
            right_text: Some(right_text.into()),
            word_diffs: Some(word_diffs),
        }
    }
}

/// Aggregate counts over a difference sequence.
///
/// Derived, never stored independently: `additions + deletions +
/// modifications == total_changes` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total number of difference entries
    pub total_changes: usize,
    /// Count of added entries
    pub additions: usize,
    /// Count of removed entries
    pub deletions: usize,
    /// Count of modified entries
    pub modifications: usize,
}

impl Summary {
    /// Count entry kinds over a difference sequence
    #[must_use]
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut summary = Self {
            total_changes: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match entry.kind {
                DiffKind::Added => summary.additions += 1,
                DiffKind::Removed => summary.deletions += 1,
                DiffKind::Modified => summary.modifications += 1,
            }
        }
        summary
    }

    /// Check if any changes were counted
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.total_changes > 0
    }
}
