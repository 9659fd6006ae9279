//! HTTP client for the review data endpoint.

use reqwest::header;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}")]
    Status { status: u16 },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One-shot client for the JSON review resource.
pub struct DataSource {
    client: reqwest::Client,
    url: String,
}

impl DataSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// GET the resource, bypassing caches, and parse the body as JSON.
    ///
    /// Shape validation is the caller's job; this returns the raw value.
    pub async fn fetch_document(&self) -> Result<Value, FetchError> {
        info!(url = %self.url, "fetching review data");
        let resp = self
            .client
            .get(&self.url)
            .header(header::CACHE_CONTROL, "no-store")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let document = serde_json::from_str(&body)?;
        Ok(document)
    }
}
