use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{AthleteOverview, SplitsResponse};
use crate::{EspnId, Result};

/// Host serving the public athlete endpoints.
pub const ESPN_WEB_BASE_URL: &str = "https://site.web.api.espn.com";

const ATHLETES_PATH: &str = "/apis/common/v3/sports/football/nfl/athletes";

/// ESPN answers bare clients with 403s.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the athlete endpoints. The base URL is injectable so
/// tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
}

impl EspnClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(ESPN_WEB_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/apis/common/v3/sports/football/nfl/athletes/{id}/{endpoint}`
    pub fn athlete_url(&self, id: EspnId, endpoint: &str) -> String {
        format!("{}{ATHLETES_PATH}/{}/{}", self.base_url, id, endpoint)
    }

    pub async fn athlete_overview(&self, id: EspnId) -> Result<AthleteOverview> {
        self.get_json(&self.athlete_url(id, "overview")).await
    }

    pub async fn athlete_splits(&self, id: EspnId) -> Result<SplitsResponse> {
        self.get_json(&self.athlete_url(id, "splits")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let res = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}

#[cfg(test)]
mod tests;
