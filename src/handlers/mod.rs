// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod shops;

pub use health::config as health_config;
pub use shops::config as shops_config;
