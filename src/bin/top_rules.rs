//! Best mined rules of a header-less rule file.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use corhist_stats::logging;
use corhist_stats::results::{DEFAULT_TOP, read_records, top_rules};
use std::path::PathBuf;

/// Sorts rules by their last two numeric columns, descending, and prints the
/// first LIMIT.
#[derive(Parser)]
#[command(name = "top_rules", version, about)]
struct Args {
    /// Tab-separated rule file without header
    rules: PathBuf,

    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    limit: usize,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let records = read_records(&args.rules)
        .with_context(|| format!("failed to read {}", args.rules.display()))?;
    tracing::info!(rules = records.len(), "ranking rules");
    let top = top_rules(records, args.limit)
        .with_context(|| format!("invalid rule in {}", args.rules.display()))?;

    for rule in top {
        println!("{}", rule.join("\t"));
    }
    Ok(())
}
