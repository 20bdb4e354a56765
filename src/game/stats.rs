use crate::error::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Key holding the total over all users in a state's counts.
pub const ALL_USERS: &str = "*";

/// Lifecycle of a correction proposed by the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CorrectionState {
    Proposed,
    Approved,
    Rejected,
    Obsolete,
}

/// Per-user counts for one state, `"*"` holding the total.
pub type UserCounts = BTreeMap<String, u64>;

/// Remote statistics: constraint type id -> state -> user -> count.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StatsDocument {
    pub types: BTreeMap<String, BTreeMap<String, UserCounts>>,
}

impl StatsDocument {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Sum of the `"*"` totals of `state` over `type_ids`.
    fn total(&self, type_ids: &[&str], state: CorrectionState) -> u64 {
        let key: &'static str = state.into();
        type_ids
            .iter()
            .filter_map(|id| self.types.get(*id))
            .filter_map(|states| states.get(key))
            .map(|users| users.get(ALL_USERS).copied().unwrap_or(0))
            .sum()
    }

    /// Distinct users over every type and state.
    pub fn users(&self) -> BTreeSet<&str> {
        self.types
            .values()
            .flat_map(|states| states.values())
            .flat_map(|users| users.keys())
            .map(String::as_str)
            .filter(|u| *u != ALL_USERS)
            .collect()
    }
}

/// Which constraint type ids a report line covers.
#[derive(Debug, Clone, Copy)]
pub enum TypeSelection {
    Ids(&'static [&'static str]),
    All,
}

/// Report lines, in print order. Types without a game yet have no ids.
pub const CONSTRAINT_TYPES: &[(&str, TypeSelection)] = &[
    ("Type", TypeSelection::Ids(&[])),
    ("Value type", TypeSelection::Ids(&[])),
    ("One-of", TypeSelection::Ids(&["Q21510859"])),
    ("Item requires stm.", TypeSelection::Ids(&[])),
    ("Value requires stm.", TypeSelection::Ids(&["Q21510864"])),
    ("Conflict with", TypeSelection::Ids(&["Q21502838"])),
    (
        "Inverse/Symmetric",
        TypeSelection::Ids(&["Q21510855", "Q21510862"]),
    ),
    ("Single value", TypeSelection::Ids(&["Q19474404"])),
    ("Distinct values", TypeSelection::Ids(&["Q21502410"])),
    ("All", TypeSelection::All),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeTally {
    pub label: String,
    pub proposed: u64,
    pub approved: u64,
    pub rejected: u64,
    pub obsolete: u64,
}

impl TypeTally {
    pub fn get(&self, state: CorrectionState) -> u64 {
        match state {
            CorrectionState::Proposed => self.proposed,
            CorrectionState::Approved => self.approved,
            CorrectionState::Rejected => self.rejected,
            CorrectionState::Obsolete => self.obsolete,
        }
    }

    /// Corrections in any state.
    pub fn total(&self) -> u64 {
        CorrectionState::iter().map(|s| self.get(s)).sum()
    }

    /// Approved share of the reviewed corrections.
    pub fn approval_ratio(&self) -> Option<f64> {
        let reviewed = self.approved + self.rejected;
        if reviewed == 0 {
            None
        } else {
            Some(self.approved as f64 / reviewed as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub tallies: Vec<TypeTally>,
    pub users: usize,
}

pub fn summarize(doc: &StatsDocument) -> GameSummary {
    let all_ids: Vec<&str> = doc.types.keys().map(String::as_str).collect();

    let tallies = CONSTRAINT_TYPES
        .iter()
        .map(|(label, selection)| {
            let ids: &[&str] = match selection {
                TypeSelection::Ids(ids) => *ids,
                TypeSelection::All => all_ids.as_slice(),
            };
            TypeTally {
                label: label.to_string(),
                proposed: doc.total(ids, CorrectionState::Proposed),
                approved: doc.total(ids, CorrectionState::Approved),
                rejected: doc.total(ids, CorrectionState::Rejected),
                obsolete: doc.total(ids, CorrectionState::Obsolete),
            }
        })
        .collect();

    let users = doc.users().len();
    tracing::debug!(types = all_ids.len(), users, "summarized game statistics");
    GameSummary { tallies, users }
}
