use async_trait::async_trait;
use serde_json::Value;

use crate::models::Result;

/// Inbound data source for the raw points payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsSource: Send + Sync {
    /// Fetch the whole payload in one read.
    async fn fetch_points(&self) -> Result<Value>;
}
