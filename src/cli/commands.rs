//! CLI command implementations

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::observability::log_info;
use crate::query::QueryPlan;
use crate::selector::Selector;
use crate::store::{Store, StoreConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Matches echoed back in a report.
const SAMPLE_LEN: usize = 10;

/// Inputs to [`bench`]
#[derive(Debug, Clone, Default)]
pub struct BenchOptions {
    /// Rows to load (`0..rows`)
    pub rows: u64,
    /// One `i % k == 0` selector per entry
    pub modulo: Vec<u64>,
    /// One `i == v` selector per entry
    pub equals: Vec<u64>,
    /// Create selectors before loading
    pub selectors_first: bool,
    /// Use `par_map` for the result stage
    pub parallel: bool,
    /// Store configuration file
    pub config: Option<PathBuf>,
}

/// Outcome of one [`bench`] run
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Plan the query ran with
    pub plan: QueryPlan,
    /// Matching rows
    pub matches: usize,
    /// The first few matching rows
    pub sample: Vec<u64>,
    /// Time spent appending rows
    pub load_ms: f64,
    /// Time spent creating and catching up selectors
    pub index_ms: f64,
    /// Time spent planning, joining and materializing results
    pub query_ms: f64,
}

/// Parses arguments, sets up logging and runs the command.
pub fn run() -> CliResult<()> {
    let cli = super::Cli::parse_args();
    super::init_logging()?;
    run_command(cli.command)
}

/// Runs a parsed command, writing its report to stdout.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Bench {
            rows,
            modulo,
            equals,
            selectors_first,
            parallel,
            json,
            config,
        } => {
            let options = BenchOptions {
                rows,
                modulo,
                equals,
                selectors_first,
                parallel,
                config,
            };
            let report = bench(&options)?;
            let mut stdout = io::stdout().lock();
            write_report(&report, json, &mut stdout)
        }
    }
}

/// Loads `0..rows`, builds the requested selectors and runs their query.
pub fn bench(options: &BenchOptions) -> CliResult<BenchReport> {
    if options.modulo.contains(&0) {
        return Err(CliError::InvalidArgument(
            "--modulo must be non-zero".to_string(),
        ));
    }

    let config = match &options.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    let store: Store<u64> = Store::with_config(config);

    let (selectors, load_ms, mut index_ms) = if options.selectors_first {
        let (selectors, index_ms) = timed(|| build_selectors(&store, options));
        let (_, load_ms) = timed(|| store.extend(0..options.rows));
        (selectors, load_ms, index_ms)
    } else {
        let (_, load_ms) = timed(|| store.extend(0..options.rows));
        let (selectors, index_ms) = timed(|| build_selectors(&store, options));
        (selectors, load_ms, index_ms)
    };

    // Pay any outstanding catch-up here so query time is join time only.
    let (_, catch_up_ms) = timed(|| selectors.iter().map(Selector::len).sum::<usize>());
    index_ms += catch_up_ms;

    let query = selectors
        .iter()
        .try_fold(store.create_query(), |query, selector| query.select(selector))?;

    let (results, query_ms) = timed(|| {
        if options.parallel {
            query.par_map(|row| *row)
        } else {
            query.rows().collect::<Vec<u64>>()
        }
    });

    let report = BenchReport {
        plan: query.plan(),
        matches: results.len(),
        sample: results.iter().take(SAMPLE_LEN).copied().collect(),
        load_ms,
        index_ms,
        query_ms,
    };

    log_info!(
        component = "cli",
        event = "BENCH_COMPLETE",
        rows = options.rows,
        selectors = selectors.len(),
        matches = report.matches,
        query_ms = report.query_ms,
    );

    Ok(report)
}

fn build_selectors(store: &Store<u64>, options: &BenchOptions) -> Vec<Selector<u64>> {
    let multiples = options
        .modulo
        .iter()
        .map(|&k| store.add_selector(move |i: &u64| i % k == 0));
    let exact = options
        .equals
        .iter()
        .map(|&v| store.add_selector(move |i: &u64| *i == v));
    multiples.chain(exact).collect()
}

fn timed<R>(work: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let result = work();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

/// Writes a report as text or JSON.
pub fn write_report<W: Write>(report: &BenchReport, json: bool, out: &mut W) -> CliResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", report.plan)?;
    writeln!(out, "Matches: {}", report.matches)?;
    writeln!(out, "Sample: {:?}", report.sample)?;
    writeln!(out, "Load: {:.3} ms", report.load_ms)?;
    writeln!(out, "Index: {:.3} ms", report.index_ms)?;
    writeln!(out, "Query: {:.3} ms", report.query_ms)?;
    Ok(())
}
