use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cosmetic rank category, best first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BadgeTier {
    Diamond,
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl BadgeTier {
    pub const ALL: [BadgeTier; 5] = [
        BadgeTier::Diamond,
        BadgeTier::Platinum,
        BadgeTier::Gold,
        BadgeTier::Silver,
        BadgeTier::Bronze,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Diamond => "Diamond",
            BadgeTier::Platinum => "Platinum",
            BadgeTier::Gold => "Gold",
            BadgeTier::Silver => "Silver",
            BadgeTier::Bronze => "Bronze",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    /// Truncated display form of `full_address`.
    pub address: String,
    pub full_address: String,
    pub ens: Option<String>,
    pub avatar_url: String,
    pub explorer_url: String,
    pub badge_tier: BadgeTier,
    pub points: u64,
    pub lifetime_points: u64,
    pub join_date: NaiveDate,
}

impl LeaderboardEntry {
    /// ENS name when known, otherwise the truncated address.
    pub fn display_name(&self) -> &str {
        self.ens.as_deref().unwrap_or(&self.address)
    }

    pub fn medal(&self) -> Option<&'static str> {
        match self.rank {
            1 => Some("🥇"),
            2 => Some("🥈"),
            3 => Some("🥉"),
            _ => None,
        }
    }
}
