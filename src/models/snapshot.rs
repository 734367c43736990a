use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LeaderboardEntry, Period};

/// Fully derived leaderboard for one (payload, period, range) combination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    pub period: Period,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub points_distributed: u64,
    pub next_distribution: NaiveDate,
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSnapshot {
    pub fn empty(
        period: Period,
        start_date: NaiveDate,
        end_date: NaiveDate,
        next_distribution: NaiveDate,
    ) -> Self {
        Self {
            period,
            start_date,
            end_date,
            points_distributed: 0,
            next_distribution,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
