//! Gamma `/events` client.
//!
//! Fetches a race's event by slug and returns its active market records.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::domain::{GammaEvent, MarketRecord};
use crate::error::{OddsError, Result};

/// Upper bound on a single backoff sleep
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Source of a race's market records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Active markets of the event identified by `slug`.
    async fn fetch_event_markets(&self, slug: &str) -> Result<Vec<MarketRecord>>;
}

/// HTTP client for the Polymarket Gamma API
pub struct GammaEventsClient {
    client: Client,
    base_url: String,
    max_retries: u8,
    retry_backoff: Duration,
}

impl GammaEventsClient {
    /// Create new Gamma client
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| OddsError::Internal(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw event list for a slug
    pub async fn get_events(&self, slug: &str) -> Result<Vec<GammaEvent>> {
        let url = format!("{}/events", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("slug", slug)])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OddsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let events: Vec<GammaEvent> = resp.json().await?;
        Ok(events)
    }

    async fn get_events_with_retry(&self, slug: &str) -> Result<Vec<GammaEvent>> {
        let mut attempt: u8 = 0;
        loop {
            match self.get_events(slug).await {
                Ok(events) => return Ok(events),
                Err(e) if attempt < self.max_retries && e.is_retryable() => {
                    let delay = backoff_delay(self.retry_backoff, attempt);
                    attempt += 1;
                    warn!(
                        "Gamma request for {} failed ({}), retry {}/{} in {:?}",
                        slug, e, attempt, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl EventSource for GammaEventsClient {
    async fn fetch_event_markets(&self, slug: &str) -> Result<Vec<MarketRecord>> {
        let events = self.get_events_with_retry(slug).await?;
        let Some(event) = events.into_iter().next() else {
            return Err(OddsError::MarketDataUnavailable(format!(
                "no event for slug {}",
                slug
            )));
        };
        Ok(active_markets(event))
    }
}

/// Doubling delay for the given attempt, capped at [`MAX_RETRY_DELAY`]
pub fn backoff_delay(base: Duration, attempt: u8) -> Duration {
    base.checked_mul(2u32.saturating_pow(u32::from(attempt)))
        .unwrap_or(MAX_RETRY_DELAY)
        .min(MAX_RETRY_DELAY)
}

/// Decode an event's markets one by one and keep the active ones.
///
/// Records that do not decode are skipped.
pub fn active_markets(event: GammaEvent) -> Vec<MarketRecord> {
    let total = event.markets.len();
    let markets: Vec<MarketRecord> = event
        .markets
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<MarketRecord>(raw) {
            Ok(market) => Some(market),
            Err(e) => {
                warn!("Skipping malformed market record: {}", e);
                None
            }
        })
        .filter(|m| m.active)
        .collect();

    debug!(
        "Event {} has {}/{} active markets",
        event.slug.as_deref().unwrap_or("?"),
        markets.len(),
        total
    );
    markets
}
