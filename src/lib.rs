pub mod config;
pub mod leaderboard;
pub mod models;
pub mod ranges;
pub mod source;
pub mod tui;
pub mod utils;

pub use config::Settings;
pub use leaderboard::{LeaderboardService, LeaderboardTransformer, ViewState};
pub use models::{
    BadgeTier, DateRangeOption, LeaderboardEntry, LeaderboardError, LeaderboardSnapshot, Period,
    RawPointsPayload, Result,
};
pub use ranges::PeriodRangeGenerator;
