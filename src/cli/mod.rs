//! CLI module for rowdex
//!
//! Provides command-line interface for:
//! - bench: Load a synthetic table, select, and time the query

mod args;
mod commands;
mod errors;

use std::io;

use tracing_subscriber::EnvFilter;

pub use args::{Cli, Command};
pub use commands::{bench, run, run_command, write_report, BenchOptions, BenchReport};
pub use errors::{CliError, CliResult};

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset or invalid.
pub fn init_logging() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
