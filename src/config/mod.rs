pub mod settings;

pub use settings::{
    AppSettings, LeaderboardSettings, Settings, SourceSettings, TuiSettings,
    DEFAULT_POINTS_ENDPOINT,
};
