// src/client/mod.rs
// DOCUMENTATION: Client-side components
// PURPOSE: Shops API client, selection view state and CSV export

pub mod export;
pub mod shops_client;
pub mod view;

pub use export::*;
pub use shops_client::*;
pub use view::*;
