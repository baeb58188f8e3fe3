//! dist library crate
//!
//! This crate provides the core functionality for the `dist` CLI: validate two
//! digit-only arguments (sample size and scale), generate a synthetic sample,
//! and report its mean and unbiased variance. It is organized into small
//! modules: `args` (argument validation), `source` (injectable random source),
//! `generate` (sample generation), `stats` (mean and variance) and `report`
//! (output formatting). The binary `src/main.rs` calls `dist_lib::run()`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `execute()` — the whole pipeline against caller-supplied tokens, random
//!   source and writer; used by tests.

pub mod args;
pub mod generate;
pub mod report;
pub mod source;
pub mod stats;

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{ArgError, parse_args};
use crate::generate::generate_samples;
use crate::report::write_report;
use crate::source::{RandomSource, StdSource};
use crate::stats::{Summary, VarianceMode, summarize};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Size of data and maximum value of data: `<count> <scale>` (digits only)
    #[arg(
        value_name = "VALUES",
        num_args = 0..,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(OsString)
    )]
    values: Vec<OsString>,

    /// Seed the random source for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// How squared deviations are combined into the variance
    #[arg(long = "variance", value_enum, default_value_t = VarianceArg::Accumulate)]
    variance: VarianceArg,
}

/// `--variance` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VarianceArg {
    /// Sum every squared deviation
    Accumulate,
    /// Keep only the last squared deviation, like the older `dist` tool
    Overwrite,
}

impl From<VarianceArg> for VarianceMode {
    fn from(arg: VarianceArg) -> Self {
        match arg {
            VarianceArg::Accumulate => VarianceMode::Accumulate,
            VarianceArg::Overwrite => VarianceMode::Overwrite,
        }
    }
}

/// Whether clap rejected a token the validator would also reject, such as
/// `-x` or `--bogus`. Those are reported as an invalid argument rather than
/// with clap's own usage error.
fn is_stray_token(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::UnknownArgument | ErrorKind::InvalidUtf8
    )
}

/// Failures of a single run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Args(#[from] ArgError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Run the dist CLI.
///
/// Validation errors are printed to stdout and exit with status 1 before any
/// statistics are printed. Diagnostics go to stderr through `tracing`; set
/// `RUST_LOG=debug` to see them all.
///
/// Example:
///
/// ```no_run
/// dist_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    init_tracing();
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if is_stray_token(&e) {
            println!("{}", ArgError::InvalidArgument);
            std::process::exit(1);
        }
        e.exit()
    });
    let mode = VarianceMode::from(cli.variance);

    let outcome = {
        let mut stdout = io::stdout().lock();
        match cli.seed {
            Some(seed) => execute(
                &cli.values,
                mode,
                &mut StdSource::seeded(seed),
                &mut stdout,
            ),
            None => execute(
                &cli.values,
                mode,
                &mut StdSource::from_entropy(),
                &mut stdout,
            ),
        }
    };

    match outcome {
        Ok(_) => {}
        Err(RunError::Args(e)) => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Validate `tokens`, generate the sample from `source`, and write the report
/// to `out`.
///
/// # Errors
/// Returns [`RunError::Args`] when the tokens are rejected (nothing is written
/// in that case) and [`RunError::Io`] when writing the report fails.
pub fn execute<T: AsRef<OsStr>, S: RandomSource, W: Write>(
    tokens: &[T],
    mode: VarianceMode,
    source: &mut S,
    out: &mut W,
) -> Result<Summary, RunError> {
    let args = parse_args(tokens)?;
    debug!(count = args.count, scale = args.scale, ?mode, "arguments validated");

    if args.count == 0 {
        warn!("sample size is 0; mean and variance are undefined");
    } else if args.count == 1 {
        warn!("sample size is 1; variance is undefined");
    }
    if args.scale == 0 {
        warn!("scale is 0; every sample divides by zero");
    }

    let samples = generate_samples(args.count, args.scale, source);
    let summary = summarize(&samples, mode);
    debug!(mean = summary.mean, variance = summary.variance, "statistics computed");

    write_report(out, &summary)?;
    Ok(summary)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
