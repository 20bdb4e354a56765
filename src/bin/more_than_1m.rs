//! Share of constraints on properties with many instances.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use corhist_stats::logging;
use corhist_stats::report::fraction;
use corhist_stats::results::{DEFAULT_THRESHOLD, PROPERTY_INSTANCES, fraction_above, read_rows};
use std::path::PathBuf;

/// Prints the fraction of rows whose FIELD is strictly above THRESHOLD.
#[derive(Parser)]
#[command(name = "more_than_1m", version, about)]
struct Args {
    /// Tab-separated result file with a header line
    results: PathBuf,

    /// Integer column to test
    #[arg(long, default_value = PROPERTY_INSTANCES)]
    field: String,

    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u64,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let rows = read_rows(&args.results)
        .with_context(|| format!("failed to read {}", args.results.display()))?;
    let share = fraction_above(&rows, &args.field, args.threshold)
        .with_context(|| format!("cannot compute share of {:?}", args.field))?;

    println!("{}", fraction(share));
    Ok(())
}
