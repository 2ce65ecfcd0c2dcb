//! Pipeline orchestration for comparison requests.
//!
//! One comparison request is one logical task: validate inputs, adapt both
//! files, run the positional diff, assemble the immutable result. The two
//! adapter calls are independent of each other and run sequentially; the
//! diff itself is synchronous and CPU-bound. There is no cancellation and
//! no retry — a failed request leaves no partial state behind.

mod output;

pub use output::{auto_detect_format, output_report, should_use_color, write_output, OutputTarget};

use std::path::Path;

use crate::adapters::adapt_file;
use crate::diff::diff_lines;
use crate::error::{DocDiffError, Result};
use crate::model::{ComparisonResult, LineSequence};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or --fail-on-change not set)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Compare two files and produce an immutable comparison result.
///
/// This is the single comparison entry point. Both inputs are validated
/// before any adapter runs, so a missing file never creates partial state.
/// Fatal adapter failures (CSV parse errors, unreadable files) propagate;
/// recoverable ones were already degraded to fallback content inside their
/// adapter.
pub fn compare_files(left: &Path, right: &Path) -> Result<ComparisonResult> {
    for path in [left, right] {
        if !path.is_file() {
            return Err(DocDiffError::MissingInput(path.to_path_buf()));
        }
    }

    let left_seq = adapt_with_context(left)?;
    let right_seq = adapt_with_context(right)?;

    let (differences, summary) = diff_lines(&left_seq, &right_seq);
    tracing::debug!(
        "Compared {} vs {} lines: {} changes",
        left_seq.len(),
        right_seq.len(),
        summary.total_changes
    );

    Ok(ComparisonResult::new(
        left_seq, right_seq, differences, summary,
    ))
}

/// Adapt one input with log context for error messages
fn adapt_with_context(path: &Path) -> Result<LineSequence> {
    tracing::info!("Adapting input: {:?}", path);
    let sequence = adapt_file(path).map_err(|e| DocDiffError::adapt(path, e))?;
    tracing::debug!("Adapted {:?} into {} lines", path, sequence.len());
    Ok(sequence)
}
