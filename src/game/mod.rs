mod client;
mod stats;

pub use client::{DEFAULT_STATS_URL, StatsClient};
pub use stats::{
    ALL_USERS, CONSTRAINT_TYPES, CorrectionState, GameSummary, StatsDocument, TypeSelection,
    TypeTally, UserCounts, summarize,
};
