// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the shops endpoint

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to a status code and a fixed public message.
/// The wrapped detail is only ever logged, never sent to the caller.
#[derive(Error, Debug)]
pub enum ShopsError {
    #[error("City is required")]
    CityRequired,

    #[error("External API error: {0}")]
    ExternalApiError(String),
}

impl ShopsError {
    /// Message sent in the `error` field of the JSON body
    pub fn public_message(&self) -> &'static str {
        match self {
            ShopsError::CityRequired => "City is required",
            ShopsError::ExternalApiError(_) => "Failed to fetch shops",
        }
    }
}

/// Convert ShopsError to HTTP response
impl ResponseError for ShopsError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ShopsError::CityRequired => StatusCode::BAD_REQUEST,
            ShopsError::ExternalApiError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
