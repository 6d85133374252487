use std::time::Duration;

use core_types::{AllData, BasicFruit};
use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const FRUITS_PATH: &str = "fruits";
pub const ALL_DATA_PATH: &str = "get_all_data";

#[derive(Error, Debug)]
pub enum FruitsApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid data format received: {0}")]
    MalformedResponse(String),
}

/// Read-only client for the fruits API.
///
/// One GET per call: no retries, no caching. A request that never answers
/// keeps its future pending unless a timeout was configured.
#[derive(Debug, Clone)]
pub struct FruitsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl FruitsApiClient {
    /// # Arguments
    ///
    /// * `base_url` - API root such as `https://host/api/v1`; a trailing `/` is ignored.
    /// * `timeout` - Optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FruitsApiError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FruitsApiError::RequestFailed(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// `GET <base>/fruits`
    pub async fn get_fruits(&self) -> Result<Vec<BasicFruit>, FruitsApiError> {
        let body = self.get_text(FRUITS_PATH).await?;
        decode_fruits(&body)
    }

    /// `GET <base>/get_all_data`
    pub async fn get_all_data(&self) -> Result<AllData, FruitsApiError> {
        let body = self.get_text(ALL_DATA_PATH).await?;
        decode_all_data(&body)
    }

    async fn get_text(&self, path: &str) -> Result<String, FruitsApiError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::debug!(url = %url, "Sending GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FruitsApiError::RequestFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Request returned error status");
            return Err(FruitsApiError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FruitsApiError::RequestFailed(format!("Failed to read body: {}", e)))?;
        tracing::debug!(url = %url, bytes = body.len(), "Received response");
        Ok(body)
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, FruitsApiError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| FruitsApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FruitsApiError::InvalidUrl(format!(
            "{}: unsupported scheme {}",
            base_url,
            url.scheme()
        )));
    }
    Ok(trimmed.to_string())
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path)
}

pub fn decode_fruits(body: &str) -> Result<Vec<BasicFruit>, FruitsApiError> {
    decode(body)
}

/// Decodes the all-data envelope; a missing or non-array `fruits` field is
/// reported as a malformed response.
pub fn decode_all_data(body: &str) -> Result<AllData, FruitsApiError> {
    decode(body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FruitsApiError> {
    serde_json::from_str(body).map_err(|e| FruitsApiError::MalformedResponse(e.to_string()))
}
