//! docdiff: format-normalizing document comparison tool
//!
//! Compares two documents of any supported format and reports the
//! differences as a terminal summary, JSON report, or xlsx workbook.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use docdiff::{
    cli::{run_compare, CompareConfig},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Input Formats:",
        "\n  Text:      txt (and any unrecognized extension)",
        "\n  Tabular:   csv",
        "\n  Workbook:  xlsx, xls",
        "\n  Metadata:  docx, doc, pdf, jpg, jpeg, png, gif",
        "\n\nOutput Formats:",
        "\n  summary, json, workbook"
    )
}

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Format-normalizing document comparison tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected
    2  Error occurred

EXAMPLES:
    # Quick comparison with a terminal summary
    docdiff compare old.txt new.txt

    # CI check that fails when the files differ
    docdiff compare old.csv new.csv --fail-on-change

    # JSON report to a file (format auto-detected from the extension)
    docdiff compare old.txt new.txt -O report.json

    # Workbook report for spreadsheet inputs
    docdiff compare old.xlsx new.xlsx -o workbook -O report.xlsx")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the original (left) file
    left: PathBuf,

    /// Path to the modified (right) file
    right: PathBuf,

    /// Output format (auto detects from the output file extension)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Also write the portable export document (JSON, or xlsx for
    /// spreadsheet-origin comparisons) under its suggested filename
    #[arg(long)]
    export: bool,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files and report the differences
    Compare(CompareArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Compare(args) => {
            let config = CompareConfig {
                left: args.left,
                right: args.right,
                format: args.output,
                output_file: args.output_file,
                export: args.export,
                fail_on_change: args.fail_on_change,
                no_color: cli.no_color,
                quiet: cli.quiet,
            };

            let exit_code = run_compare(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
