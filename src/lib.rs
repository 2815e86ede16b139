// src/lib.rs
// DOCUMENTATION: Library root shared by the server and the picker binaries
// PURPOSE: Expose models, services, handlers and the client-side view

pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
