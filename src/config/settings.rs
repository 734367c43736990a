use chrono::NaiveDate;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::leaderboard::TierThresholds;
use crate::ranges::{default_all_time_start, DEFAULT_MONTH_OPTIONS, DEFAULT_WEEK_OPTIONS};

pub const DEFAULT_POINTS_ENDPOINT: &str = "https://api-points.ltv.finance/address-to-points-sorted";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub source: SourceSettings,
    pub leaderboard: LeaderboardSettings,
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardSettings {
    /// Raw points are fixed-point with this many decimals.
    pub points_decimals: u32,
    pub all_time_start: NaiveDate,
    pub week_options: usize,
    pub month_options: usize,
    /// Display cap on returned rows; totals still cover every row.
    pub max_entries: Option<usize>,
    pub tiers: TierThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    pub tick_rate_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "LTV Points Leaderboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_POINTS_ENDPOINT.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            points_decimals: 24,
            all_time_start: default_all_time_start(),
            week_options: DEFAULT_WEEK_OPTIONS,
            month_options: DEFAULT_MONTH_OPTIONS,
            max_entries: None,
            tiers: TierThresholds::default(),
        }
    }
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            source: SourceSettings::default(),
            leaderboard: LeaderboardSettings::default(),
            tui: TuiSettings::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("LTV_LEADERBOARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("LTV_LEADERBOARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source.endpoint.trim().is_empty() {
            return Err("Points endpoint must not be empty".to_string());
        }

        if self.source.timeout_seconds == 0 {
            return Err("Source timeout must be at least one second".to_string());
        }

        let board = &self.leaderboard;
        if board.week_options == 0 || board.month_options == 0 {
            return Err("Week and month option counts must be positive".to_string());
        }

        if board.max_entries == Some(0) {
            return Err("max_entries must be positive when set".to_string());
        }

        board.tiers.validate()
    }
}
