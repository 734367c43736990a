use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    config::{LeaderboardSettings, Settings},
    leaderboard::LeaderboardTransformer,
    models::{DateRangeOption, LeaderboardSnapshot, Period, RawPointsPayload, Result},
    ranges::PeriodRangeGenerator,
    source::{HttpPointsSource, PointsSource},
};

/// Fetches the points payload once and turns it into a snapshot.
pub struct LeaderboardService {
    source: Arc<dyn PointsSource>,
    transformer: LeaderboardTransformer,
    settings: LeaderboardSettings,
}

impl LeaderboardService {
    pub fn new(source: Arc<dyn PointsSource>, settings: &LeaderboardSettings) -> Self {
        Self {
            source,
            transformer: LeaderboardTransformer::new(settings),
            settings: settings.clone(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let source = Arc::new(HttpPointsSource::new(&settings.source)?);
        debug!("Points source: {}", source.endpoint());
        Ok(Self::new(source, &settings.leaderboard))
    }

    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.transformer = self.transformer.with_max_entries(max_entries);
        self
    }

    pub fn generator(&self, today: NaiveDate) -> PeriodRangeGenerator {
        PeriodRangeGenerator::from_settings(&self.settings, today)
    }

    pub async fn load(
        &self,
        period: Period,
        selection: Option<&DateRangeOption>,
        today: NaiveDate,
    ) -> Result<LeaderboardSnapshot> {
        let generator = self.generator(today);
        let active = generator.resolve_active_range(period, selection);
        let (start, end) = generator.effective_bounds(active.as_ref());

        info!("Loading {} leaderboard for {} to {}", period, start, end);

        let raw = match self.source.fetch_points().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to fetch points: {}", e);
                return Err(e);
            }
        };

        let payload = RawPointsPayload::from_value(&raw);
        if payload.is_absent() {
            warn!("Points payload has no address list, showing an empty leaderboard");
        }

        let snapshot = self.transformer.transform(&payload, period, start, end, today);
        info!(
            "Built leaderboard with {} entries and {} points",
            snapshot.entries.len(),
            snapshot.points_distributed
        );

        Ok(snapshot)
    }
}
