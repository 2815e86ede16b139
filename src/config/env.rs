// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Environment variable holding the places API key
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Default places API root (text search lives at `/places:searchText`)
pub const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 3000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Places API key as seen at startup
    pub places_api_key: String,

    /// Places API root URL, overridable to point at a local mock
    pub places_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            places_api_key: env::var(API_KEY_VAR).unwrap_or_default(),

            places_base_url: env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACES_BASE_URL.to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.places_base_url.trim().is_empty() {
            return Err("PLACES_BASE_URL must not be empty".to_string());
        }

        if self.places_api_key.is_empty() {
            log::warn!("{} not configured - shop searches will fail", API_KEY_VAR);
        }

        Ok(())
    }

    /// API key for the current request
    /// DOCUMENTATION: Re-read from the process environment on every call so a
    /// rotated key is picked up without a restart. Falls back to the startup value.
    pub fn api_key(&self) -> String {
        env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.places_api_key.clone())
    }
}
