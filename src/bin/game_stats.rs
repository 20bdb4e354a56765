//! LaTeX summary of the constraint correction game.
//!
//! ```bash
//! game_stats
//! CORHIST_STATS_URL=http://localhost:8080/stats game_stats -v
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use corhist_stats::game::{DEFAULT_STATS_URL, StatsClient, summarize};
use corhist_stats::logging;
use corhist_stats::report::game_rows;
use std::time::Duration;

/// Per constraint type counts of proposed, approved, rejected and obsolete
/// corrections, with the approval ratio.
#[derive(Parser)]
#[command(name = "game_stats", version, about)]
struct Args {
    /// Statistics endpoint
    #[arg(long, env = "CORHIST_STATS_URL", default_value = DEFAULT_STATS_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let client = StatsClient::new(Duration::from_secs(args.timeout_secs))
        .context("failed to build HTTP client")?;
    let doc = client
        .fetch(&args.url)
        .with_context(|| format!("failed to fetch {}", args.url))?;

    for line in game_rows(&summarize(&doc)) {
        println!("{line}");
    }
    Ok(())
}
