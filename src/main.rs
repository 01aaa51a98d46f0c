//! rowdex CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`, printing any error
//! with its code to stderr and exiting non-zero.

use rowdex::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("[{}] {}", e.code(), e);
        std::process::exit(1);
    }
}
