//! **A format-normalizing document comparison library.**
//!
//! `docdiff` ingests two arbitrary documents, normalizes each into an
//! ordered sequence of comparable text lines regardless of source format,
//! computes a structured difference at line and word granularity, and emits
//! machine- and human-consumable comparison reports. It powers the
//! `docdiff` command-line tool and can be embedded as a library.
//!
//! ## Key Features
//!
//! - **Multi-Format Normalization**: plain text, CSV, and xlsx/xls
//!   workbooks are adapted into one canonical line representation; Word
//!   documents, PDFs, and images are recognized and described by metadata
//!   placeholder adapters. Unknown extensions fall back to plain text.
//! - **Positional Diffing**: lines are classified as added, removed, or
//!   modified strictly by line index, and modified lines carry a
//!   token-level word diff.
//! - **Flexible Reporting**: terminal summary, a portable JSON report, and
//!   a multi-sheet xlsx report for tabular-origin comparisons.
//!
//! ## The positional-diff contract
//!
//! The line engine performs **no** longest-common-subsequence or Myers
//! alignment. Index `i` on the left is always compared with index `i` on
//! the right, so a single line inserted at the top of one file shifts every
//! later index and surfaces as a cascade of modified entries instead of one
//! added entry. That behavior is part of the external contract and is
//! pinned by tests; callers that need true sequence alignment need a
//! different tool.
//!
//! ## Core Concepts & Modules
//!
//! - **[`adapters`]**: one [`adapters::FormatAdapter`] per input kind,
//!   selected by a closed extension mapping. Produces the canonical
//!   [`model::LineSequence`].
//! - **[`diff`]**: the positional line and word engines.
//! - **[`model`]**: the [`model::ComparisonResult`] value consumed by
//!   exporters and presentation layers.
//! - **[`pipeline`]**: [`pipeline::compare_files`], the single comparison
//!   entry point, plus output routing.
//! - **[`reports`]**: report generators and [`reports::export_report`],
//!   the single export entry point.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use docdiff::compare_files;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = compare_files(Path::new("old.csv"), Path::new("new.csv"))?;
//!
//!     println!(
//!         "{} changes ({} added, {} removed, {} modified)",
//!         result.summary.total_changes,
//!         result.summary.additions,
//!         result.summary.deletions,
//!         result.summary.modifications,
//!     );
//!
//!     for entry in &result.differences {
//!         println!("line {}: {:?}", entry.line + 1, entry.kind);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Exporting a report
//!
//! ```no_run
//! use std::path::Path;
//! use docdiff::{compare_files, reports::export_report};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = compare_files(Path::new("old.xlsx"), Path::new("new.xlsx"))?;
//!     let (document, suggested_name) = export_report(&result)?;
//!     std::fs::write(&suggested_name, document.as_bytes())?;
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔f64/u32 casts appear in workbook cell math; values are bounded
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // # Errors / # Panics doc sections are not enforced
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod adapters;
pub mod cli;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use adapters::{adapt_file, AdapterError, FileKind, FormatAdapter};
pub use diff::{diff_lines, diff_words, DiffEntry, DiffKind, Summary, WordDiffKind, WordDiffSpan};
pub use error::{DocDiffError, Result};
pub use model::{ComparisonResult, LineSequence, SourceKind};
pub use pipeline::compare_files;
pub use reports::{export_report, ReportFormat, ReportGenerator, ReportOutput};
