// src/services/places_client.rs
// DOCUMENTATION: Places text search API client
// PURPOSE: Fetch single result pages from the places API

use crate::errors::ShopsError;
use crate::models::{SearchTextRequest, ShopPage};
use reqwest::Client;

/// Fields requested from the text search endpoint
pub const FIELD_MASK: &str =
    "places.displayName,places.nationalPhoneNumber,places.id,nextPageToken";

/// Places API client
/// DOCUMENTATION: Handles authentication headers and the text search call.
/// One instance is built per incoming request.
pub struct PlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Places API key
    api_key: String,
    /// Base URL for the places API
    base_url: String,
}

impl PlacesClient {
    /// Create new places API client
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of text search results
    /// DOCUMENTATION: POSTs `{textQuery, pageToken}` to `/places:searchText`
    ///
    /// # Arguments
    /// * `text_query` - Free text query, e.g. "t-shirt printer in Surat, India"
    /// * `page_token` - Continuation token from the previous page, None for the first
    ///
    /// # Returns
    /// The page's shops and the next page token (if any)
    pub async fn search_text(
        &self,
        text_query: &str,
        page_token: Option<String>,
    ) -> Result<ShopPage, ShopsError> {
        let url = format!("{}/places:searchText", self.base_url);

        let body = SearchTextRequest {
            text_query: text_query.to_string(),
            page_token,
        };

        log::debug!(
            "Places text search: query={:?}, continued={}",
            text_query,
            body.page_token.is_some()
        );

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Places API request failed: {}", e);
                ShopsError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Places API error {}: {}", status, body);
            return Err(ShopsError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let page: ShopPage = response.json().await.map_err(|e| {
            log::error!("Failed to parse places response: {}", e);
            ShopsError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        log::debug!("Places text search returned {} results", page.places.len());
        Ok(page)
    }
}
