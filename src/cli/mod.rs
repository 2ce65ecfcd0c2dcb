//! CLI command handlers.
//!
//! Each subcommand has a `run_*` function that takes a fully-built config
//! struct and returns the process exit code.

mod compare;

pub use compare::{run_compare, CompareConfig};
