use serde::{Deserialize, Serialize};

use crate::models::BadgeTier;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierThreshold {
    pub tier: BadgeTier,
    /// Last rank (inclusive) that earns `tier`.
    pub max_rank: usize,
}

/// Rank-to-badge table. Ranks beyond the last threshold get `fallback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierThresholds {
    pub thresholds: Vec<TierThreshold>,
    pub fallback: BadgeTier,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            thresholds: vec![
                TierThreshold { tier: BadgeTier::Diamond, max_rank: 10 },
                TierThreshold { tier: BadgeTier::Platinum, max_rank: 50 },
                TierThreshold { tier: BadgeTier::Gold, max_rank: 100 },
                TierThreshold { tier: BadgeTier::Silver, max_rank: 500 },
            ],
            fallback: BadgeTier::Bronze,
        }
    }
}

impl TierThresholds {
    pub fn tier_for_rank(&self, rank: usize) -> BadgeTier {
        self.thresholds
            .iter()
            .find(|t| rank <= t.max_rank)
            .map(|t| t.tier)
            .unwrap_or(self.fallback)
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut previous: Option<&TierThreshold> = None;
        for threshold in &self.thresholds {
            if threshold.max_rank == 0 {
                return Err(format!("{} threshold must cover at least rank 1", threshold.tier.as_str()));
            }
            if let Some(prev) = previous {
                if threshold.max_rank <= prev.max_rank {
                    return Err(format!(
                        "Tier ranks must increase: {} ({}) after {} ({})",
                        threshold.tier.as_str(),
                        threshold.max_rank,
                        prev.tier.as_str(),
                        prev.max_rank
                    ));
                }
                if threshold.tier <= prev.tier {
                    return Err(format!(
                        "Tiers must be listed best first: {} after {}",
                        threshold.tier.as_str(),
                        prev.tier.as_str()
                    ));
                }
            }
            previous = Some(threshold);
        }

        if let Some(last) = previous {
            if self.fallback <= last.tier {
                return Err(format!(
                    "Fallback tier {} must rank below {}",
                    self.fallback.as_str(),
                    last.tier.as_str()
                ));
            }
        }

        Ok(())
    }
}
