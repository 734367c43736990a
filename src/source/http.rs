use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{
    config::SourceSettings,
    models::{LeaderboardError, Result},
    source::PointsSource,
};

/// Unauthenticated GET of the points endpoint. No retries.
pub struct HttpPointsSource {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpPointsSource {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http_client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn with_client(http_client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PointsSource for HttpPointsSource {
    async fn fetch_points(&self) -> Result<Value> {
        debug!("GET {}", self.endpoint);

        let response = self.http_client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LeaderboardError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from points API", body.len());

        Ok(serde_json::from_str(&body)?)
    }
}
