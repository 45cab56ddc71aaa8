//! The Odds API client.
//!
//! Thin REST wrapper around the provider's /v4/sports/{sport}/odds endpoint.
//! A non-success response is surfaced as a typed error carrying the status
//! code and the raw body; the scan pipeline is never run in that case.

use std::fmt;
use std::time::Duration;

use tracing::info;

use crate::config::{join_values, Config, HTTP_TIMEOUT_SECS, ODDS_API_BASE};
use crate::types::Event;

/// Failure to obtain odds from the provider.
#[derive(Debug)]
pub enum OddsApiError {
    /// Transport-level failure (connect, timeout, body decode)
    Request(reqwest::Error),
    /// Provider answered with a non-success status; body kept verbatim
    Status { status: u16, body: String },
}

impl fmt::Display for OddsApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsApiError::Request(e) => write!(f, "odds request failed: {}", e),
            OddsApiError::Status { status, body } => write!(
                f,
                "Failed to get odds: status_code {}, response body {}",
                status, body
            ),
        }
    }
}

impl std::error::Error for OddsApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OddsApiError::Request(e) => Some(e),
            OddsApiError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for OddsApiError {
    fn from(e: reqwest::Error) -> Self {
        OddsApiError::Request(e)
    }
}

/// REST client for The Odds API.
pub struct OddsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OddsApiClient {
    pub fn new() -> Self {
        Self::with_base_url(ODDS_API_BASE)
    }

    /// Client against a non-default base URL (test servers).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current odds for the configured sport, regions and markets.
    pub async fn fetch_odds(&self, config: &Config) -> Result<Vec<Event>, OddsApiError> {
        let url = format!("{}/v4/sports/{}/odds", self.base_url, config.sport);

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", config.api_key.clone()),
                ("regions", join_values(&config.regions)),
                ("markets", join_values(&config.markets)),
                ("oddsFormat", config.odds_format.to_string()),
                ("dateFormat", config.date_format.to_string()),
            ])
            .send()
            .await?;

        // The provider reports request quota on every response.
        if let Some(remaining) = resp
            .headers()
            .get("x-requests-remaining")
            .and_then(|v| v.to_str().ok())
        {
            info!("[ODDS] API requests remaining: {}", remaining);
        }

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OddsApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let events: Vec<Event> = resp.json().await?;
        info!("[ODDS] Fetched {} events for sport {:?}", events.len(), config.sport);
        Ok(events)
    }
}

impl Default for OddsApiClient {
    fn default() -> Self {
        Self::new()
    }
}
