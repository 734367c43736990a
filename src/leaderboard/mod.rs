pub mod service;
pub mod state;
pub mod tiers;
pub mod transformer;

pub use service::LeaderboardService;
pub use state::{FetchTicket, ViewState};
pub use tiers::{TierThreshold, TierThresholds};
pub use transformer::{join_date_for, scale_points, LeaderboardTransformer};
