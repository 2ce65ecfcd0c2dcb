//! Positional line diff engine.
//!
//! Alignment is strictly by line index: index `i` on the left is compared
//! with index `i` on the right, with missing indices read as empty lines.
//! There is no re-synchronization after an insertion — one line inserted at
//! the head of the right sequence shifts every subsequent index and surfaces
//! as a cascade of modified entries rather than a single added entry. That
//! is the documented contract, not an oversight; see the crate docs.

use super::result::{DiffEntry, Summary};
use super::words::diff_words;
use crate::model::LineSequence;

/// Compare two line sequences index by index.
///
/// Returns the classified differences in increasing index order — exporters
/// and viewers rely on that ordering — together with the derived summary.
/// Equal lines (including two empty lines at the same index) produce no
/// entry, so `diff_lines(l, l)` is always empty.
#[must_use]
pub fn diff_lines(left: &LineSequence, right: &LineSequence) -> (Vec<DiffEntry>, Summary) {
    let max_len = left.len().max(right.len());
    let mut differences = Vec::new();

    for i in 0..max_len {
        let left_line = left.line_or_empty(i);
        let right_line = right.line_or_empty(i);

        if left_line == right_line {
            continue;
        }

        let entry = if left_line.is_empty() {
            DiffEntry::added(i, right_line)
        } else if right_line.is_empty() {
            DiffEntry::removed(i, left_line)
        } else {
            DiffEntry::modified(i, left_line, right_line, diff_words(left_line, right_line))
        };
        differences.push(entry);
    }

    let summary = Summary::from_entries(&differences);
    (differences, summary)
}
