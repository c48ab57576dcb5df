//! Domain types for the historical scorer table.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One (player, season) appearance in a top-flight season.
///
/// For example:
///
/// ```text
/// | season    | player         | league | position   | age  |
/// | 2014-2015 | Steven Gerrard | 9      | Midfielder | 34.6 |
/// ```
///
/// `league` is the number of league goals scored by the player in the season;
/// `age` is the player's age at the season midpoint, taken to be 1 January.
///
/// Data source: www.lfchistory.com.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerRecord {
    /// Season label, e.g. "2014-2015"
    pub season: String,
    /// Player display name
    pub player: String,
    /// League goals scored that season (CSV column `league`)
    #[serde(rename = "league")]
    pub league_goals: u32,
    /// Free-text role label, e.g. "Forward"
    pub position: String,
    /// Age at the season midpoint
    pub age: f64,
}

/// The canonical, queryable set of historical scoring records.
///
/// Ordered as in the source file and immutable after load; the running
/// process shares it read-only across request handlers behind an `Arc`.
/// Invariants (season label format, unique (player, season) pairs) are
/// enforced by [`crate::parsing::load_scorer_dataset`]; constructing a
/// dataset directly bypasses them, which in-memory tests rely on.
#[derive(Debug, Clone)]
pub struct ScorerDataset {
    records: Vec<ScorerRecord>,
}

impl ScorerDataset {
    /// Wrap an already-validated, ordered record list.
    pub fn new(records: Vec<ScorerRecord>) -> Self {
        Self { records }
    }

    /// All records in original row order.
    pub fn records(&self) -> &[ScorerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record whose player is in `names`, in original row order.
    ///
    /// An empty `names` set or a set matching nothing yields an empty
    /// result; callers decide fallback policy.
    pub fn filter_by_players<'a>(&'a self, names: &HashSet<String>) -> Vec<&'a ScorerRecord> {
        self.records
            .iter()
            .filter(|r| names.contains(r.player.as_str()))
            .collect()
    }

    /// Lexicographically greatest season label.
    ///
    /// Season labels are validated at load time to sort correctly as
    /// strings, so string ordering is chronological ordering.
    pub fn max_season(&self) -> Option<&str> {
        self.records
            .iter()
            .map(|r| r.season.as_str())
            .max()
    }
}
