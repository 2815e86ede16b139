// src/models/shop.rs
// DOCUMENTATION: Core data structures for shops
// PURPOSE: Wire models shared by the places client, the endpoint and the picker

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A shop as returned by the places text search
/// DOCUMENTATION: Passed through to callers unchanged (camelCase JSON).
/// Entries without a phone number are kept here; filtering is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Places API identifier
    pub id: String,

    /// Localized business name
    #[serde(default)]
    pub display_name: DisplayName,

    /// Phone number in national format, used for WhatsApp contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_phone_number: Option<String>,
}

impl Shop {
    /// Display name text
    pub fn name(&self) -> &str {
        &self.display_name.text
    }

    /// Phone number if present and non-empty
    pub fn phone(&self) -> Option<&str> {
        self.national_phone_number
            .as_deref()
            .filter(|phone| !phone.is_empty())
    }
}

/// Localized text wrapper used by the places API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayName {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Request body for the text search endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest {
    pub text_query: String,
    /// Omitted on the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// One page of text search results
/// DOCUMENTATION: `places` is absent entirely when the search has no results
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPage {
    #[serde(default)]
    pub places: Vec<Shop>,
    pub next_page_token: Option<String>,
}

/// Path parameters for GET /api/shops/{city}
#[derive(Debug, Deserialize, Validate)]
pub struct CityPath {
    #[validate(custom = "validate_city")]
    pub city: String,
}

/// City must contain something other than whitespace
fn validate_city(city: &str) -> Result<(), ValidationError> {
    if city.trim().is_empty() {
        return Err(ValidationError::new("city_required"));
    }
    Ok(())
}
