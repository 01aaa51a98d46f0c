//! CLI argument definitions using clap
//!
//! Commands:
//! - rowdex bench [--rows N] [--modulo K]... [--equals V]... [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rowdex - an in-memory row store with lazily maintained selectors
#[derive(Parser, Debug)]
#[command(name = "rowdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load 0..N as rows, select with the given predicates, and time the query
    Bench {
        /// Number of rows to load
        #[arg(long, default_value_t = 1_000_000)]
        rows: u64,

        /// Add a selector matching multiples of K (repeatable)
        #[arg(long = "modulo", value_name = "K")]
        modulo: Vec<u64>,

        /// Add a selector matching exactly V (repeatable)
        #[arg(long = "equals", value_name = "V")]
        equals: Vec<u64>,

        /// Create the selectors before loading, so the query pays for catch-up
        #[arg(long)]
        selectors_first: bool,

        /// Map the results on several threads
        #[arg(long)]
        parallel: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Path to a JSON store configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
