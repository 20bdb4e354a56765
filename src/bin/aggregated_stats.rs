//! Aggregated statistics of a constraint-correction result file.
//!
//! ```bash
//! aggregated_stats results.tsv
//! aggregated_stats results.tsv --format latex
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use corhist_stats::logging;
use corhist_stats::report::{evaluation_rows, summary_line};
use corhist_stats::results::{ConstraintSummary, read_rows};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One summary sentence
    Prose,
    /// LaTeX table rows, one per metric family and combination
    Latex,
}

/// Totals and weighted/average precision, recall and F-1 of every
/// evaluated constraint.
#[derive(Parser)]
#[command(name = "aggregated_stats", version, about)]
struct Args {
    /// Tab-separated result file with a header line
    results: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Prose)]
    format: Format,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let rows = read_rows(&args.results)
        .with_context(|| format!("failed to read {}", args.results.display()))?;
    let summary = ConstraintSummary::from_rows(&rows)
        .with_context(|| format!("invalid result row in {}", args.results.display()))?;

    match args.format {
        Format::Prose => println!("{}", summary_line(&summary)),
        Format::Latex => {
            for line in evaluation_rows(&summary) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
