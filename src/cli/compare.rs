//! Compare command handler.
//!
//! Implements the `compare` subcommand: adapt both inputs, diff them, and
//! route the report to the requested destination. This is the presentation
//! seam — the comparison core below it never learns where its results go.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::model::ComparisonResult;
use crate::pipeline::{compare_files, exit_codes, output_report};
use crate::reports::{export_report, ReportFormat};

/// Configuration for one compare invocation
pub struct CompareConfig {
    /// Path to the original (left) file
    pub left: PathBuf,
    /// Path to the modified (right) file
    pub right: PathBuf,
    /// Requested output format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Additionally write the portable export document with its suggested name
    pub export: bool,
    /// Exit with code 1 if any changes are detected
    pub fail_on_change: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let result = compare_files(&config.left, &config.right)
        .with_context(|| format!("Comparing {:?} against {:?}", config.left, config.right))?;

    if !config.quiet {
        tracing::info!(
            "{} changes ({} added, {} removed, {} modified)",
            result.summary.total_changes,
            result.summary.additions,
            result.summary.deletions,
            result.summary.modifications
        );
    }

    let exit_code = determine_exit_code(&config, &result);

    output_report(
        &result,
        config.format,
        config.output_file.clone(),
        config.no_color,
        config.quiet,
    )?;

    if config.export {
        let (document, suggested_name) = export_report(&result)?;
        std::fs::write(&suggested_name, document.as_bytes())
            .with_context(|| format!("Failed to write export document {suggested_name}"))?;
        if !config.quiet {
            tracing::info!("Export written to {suggested_name}");
        }
    }

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &CompareConfig, result: &ComparisonResult) -> i32 {
    if config.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
