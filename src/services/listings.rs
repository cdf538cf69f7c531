//! Client for the external listings API.
//!
//! The API owns all listing data; this client only fetches it and keeps the
//! last successful result so page navigation does not hammer the upstream.
//! The refresh button bypasses the cache on both sides: ours, and the API's
//! own via `?refresh=true`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A property listing as served by the external API. Read-only from our side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: String,
    pub price_value: i64,
    pub address: String,
    pub url: String,
    pub description: String,
    pub photos: Vec<String>,
    pub area: String,
    pub rooms: String,
    pub floor: String,
    pub metro: String,
    pub published_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ListingApiError {
    #[error("listings API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("listings API returned status {0}")]
    Status(StatusCode),
}

pub struct ListingClient {
    base_url: String,
    http: reqwest::Client,
    cache: RwLock<Option<Vec<Listing>>>,
}

impl ListingClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url,
            http,
            cache: RwLock::new(None),
        })
    }

    /// Fetches the current listing collection. Non-forced calls are served
    /// from the last successful fetch when one exists; `force_refresh` always
    /// goes to the network and asks the API to bypass its own cache too.
    pub async fn get_listings(&self, force_refresh: bool) -> Result<Vec<Listing>, ListingApiError> {
        if !force_refresh {
            if let Some(cached) = self.cache.read().await.clone() {
                debug!(count = cached.len(), "serving listings from cache");
                return Ok(cached);
            }
        }

        let mut url = format!("{}/listings", self.base_url);
        if force_refresh {
            url.push_str("?refresh=true");
        }

        let resp = self.http.get(&url).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(ListingApiError::Status(resp.status()));
        }
        let listings: Vec<Listing> = resp.json().await?;
        debug!(count = listings.len(), "fetched listings from API");

        *self.cache.write().await = Some(listings.clone());
        Ok(listings)
    }

    /// Current search settings as an arbitrary key/value object.
    pub async fn get_settings(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, ListingApiError> {
        let url = format!("{}/settings", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(ListingApiError::Status(resp.status()));
        }
        let settings = resp.json().await?;
        debug!("fetched settings from API");
        Ok(settings)
    }

    pub async fn update_settings(
        &self,
        settings: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), ListingApiError> {
        let url = format!("{}/settings", self.base_url);
        let resp = self.http.put(&url).json(settings).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(ListingApiError::Status(resp.status()));
        }
        debug!("updated settings via API");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), ListingApiError> {
        let url = format!("{}/health", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(ListingApiError::Status(resp.status()));
        }
        Ok(())
    }
}
