//! Output handling for comparison reports.
//!
//! Provides utilities for auto-detecting the output format and writing
//! text or binary reports to stdout or a file.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::ComparisonResult;
use crate::reports::{create_reporter, ReportFormat, ReportOutput};

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }
}

/// Auto-detect the output format from the output target.
///
/// A `.json` output file selects the JSON report and `.xlsx` the workbook
/// report; everything else (including stdout) resolves to the summary.
#[must_use]
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    match format {
        ReportFormat::Auto => match target {
            OutputTarget::File(path) => match extension_of(path).as_str() {
                "json" => ReportFormat::Json,
                "xlsx" => ReportFormat::Workbook,
                _ => ReportFormat::Summary,
            },
            OutputTarget::Stdout => ReportFormat::Summary,
        },
        other => other,
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write a generated report to the target (stdout or file).
///
/// Binary reports are refused on stdout: a workbook on a terminal is never
/// what anyone wants, so it requires an explicit output file.
pub fn write_output(output: &ReportOutput, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => match output {
            ReportOutput::Text(text) => {
                println!("{text}");
                Ok(())
            }
            ReportOutput::Binary(_) => {
                bail!("binary report output requires an output file (-O)")
            }
        },
        OutputTarget::File(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            file.write_all(output.as_bytes())
                .with_context(|| format!("Failed to write output to {path:?}"))?;
            if !quiet {
                tracing::info!("Report written to {:?}", path);
            }
            Ok(())
        }
    }
}

/// Generate a report in the effective format and write it out.
pub fn output_report(
    result: &ComparisonResult,
    format: ReportFormat,
    output_file: Option<PathBuf>,
    no_color: bool,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output_file);
    let effective = auto_detect_format(format, &target);
    let use_color = should_use_color(no_color) && matches!(target, OutputTarget::Stdout);

    let reporter = create_reporter(effective, use_color);
    let report = reporter
        .generate(result)
        .context("Failed to generate report")?;
    write_output(&report, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option() {
        assert!(matches!(
            OutputTarget::from_option(None),
            OutputTarget::Stdout
        ));
        assert!(matches!(
            OutputTarget::from_option(Some(PathBuf::from("/tmp/x.json"))),
            OutputTarget::File(_)
        ));
    }

    #[test]
    fn test_auto_detect_format_stdout() {
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &OutputTarget::Stdout),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_auto_detect_format_by_extension() {
        let json = OutputTarget::File(PathBuf::from("/tmp/report.json"));
        let xlsx = OutputTarget::File(PathBuf::from("/tmp/report.XLSX"));
        let txt = OutputTarget::File(PathBuf::from("/tmp/report.txt"));
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &json),
            ReportFormat::Json
        );
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &xlsx),
            ReportFormat::Workbook
        );
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &txt),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_explicit_format_wins_over_auto_detection() {
        let json = OutputTarget::File(PathBuf::from("/tmp/report.json"));
        assert_eq!(
            auto_detect_format(ReportFormat::Summary, &json),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_binary_to_stdout_is_refused() {
        let output = ReportOutput::Binary(vec![0x50, 0x4b]);
        let err = write_output(&output, &OutputTarget::Stdout, true).unwrap_err();
        assert!(err.to_string().contains("output file"));
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }
}
