//! Inventory API client
//!
//! Authenticated read access to the item resource endpoint. No retries:
//! a failed fetch is a final failure for that item and the caller decides
//! what that means for the rest of its batch.

use http::StatusCode;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, instrument};

use super::model::ItemRecord;
use super::ItemSource;
use crate::core::config::ErpConfig;

/// Item lookup failures, one variant per observable cause
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured base URL cannot hold path segments
    #[error("invalid inventory API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Network-level failure reaching the API
    #[error("request to inventory API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; status and raw body are kept for diagnosis
    #[error("inventory API rejected request: {status} {body}")]
    Rejected { status: StatusCode, body: String },

    /// Response body was not the expected `{ "data": {...} }` structure
    #[error("inventory API returned malformed response: {0}")]
    Malformed(String),
}

/// Response envelope of the item resource endpoint
#[derive(Debug, serde::Deserialize)]
struct ItemEnvelope {
    data: Option<ItemRecord>,
}

/// Inventory API client
///
/// Cheap to clone; the inner reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct ErpClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    api_secret: String,
}

impl ErpClient {
    /// Create a client from the ERP section of the process configuration
    pub fn new(config: &ErpConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    /// Build the item resource URL with the code as an encoded path segment
    fn item_url(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("base URL validated in new()")
            .pop_if_empty()
            .extend(["api", "resource", "Item", code]);
        url
    }
}

impl ItemSource for ErpClient {
    #[instrument(skip(self), fields(code = %code))]
    async fn fetch_item(&self, code: &str) -> Result<ItemRecord, FetchError> {
        let url = self.item_url(code);
        debug!(url = %url, "Fetching item");

        let response = self
            .http
            .get(url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Rejected { status, body });
        }

        let envelope: ItemEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        let mut record = envelope
            .data
            .ok_or_else(|| FetchError::Malformed("response has no data object".to_string()))?;

        record.code = code.to_string();
        Ok(record)
    }
}
