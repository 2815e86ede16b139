// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod places_client;
pub mod shop_search;

pub use places_client::*;
pub use shop_search::*;
