// src/client/shops_client.rs
// DOCUMENTATION: HTTP client for the shops endpoint
// PURPOSE: Call GET /api/shops/{city} from the picker

use crate::models::Shop;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Characters left as-is when encoding a path component
/// (same unreserved set as JavaScript's encodeURIComponent)
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failures seen by the client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to fetch shops.")]
    Status(StatusCode),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Percent-encode a city for use as a single path segment
pub fn encode_city(city: &str) -> String {
    utf8_percent_encode(city, COMPONENT).to_string()
}

/// Client for the shops endpoint
pub struct ShopsClient {
    client: Client,
    base_url: String,
}

impl ShopsClient {
    /// Create a client for a server root such as "http://127.0.0.1:3000"
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check that the server answers on /health
    pub async fn is_healthy(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Fetch all shops for a city
    /// DOCUMENTATION: Any non-2xx answer becomes ClientError::Status
    pub async fn fetch_shops(&self, city: &str) -> Result<Vec<Shop>, ClientError> {
        let url = format!("{}/api/shops/{}", self.base_url, encode_city(city));

        log::debug!("Fetching shops: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            log::warn!("Shops endpoint answered {}", status);
            return Err(ClientError::Status(status));
        }

        Ok(response.json().await?)
    }
}
