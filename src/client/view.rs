// src/client/view.rs
// DOCUMENTATION: Selection view state
// PURPOSE: Explicit state and transitions behind the picker: search, toggle, export

use crate::client::{export_selected, ClientError, CsvExport, ExportError};
use crate::models::Shop;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Alert shown when searching with a blank city
pub const EMPTY_CITY_ALERT: &str = "Please enter a city name.";

/// A search result the user can include in or exclude from the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableShop {
    /// Shared so untouched entries survive a toggle by identity
    pub shop: Arc<Shop>,
    pub selected: bool,
}

/// Reasons a search did not update the list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Please enter a city name.")]
    EmptyCity,

    #[error("{0}")]
    Fetch(String),
}

/// Keep contactable shops only, all selected
pub fn select_contactable(shops: Vec<Shop>) -> Vec<SelectableShop> {
    shops
        .into_iter()
        .filter(|shop| shop.phone().is_some())
        .map(|shop| SelectableShop {
            shop: Arc::new(shop),
            selected: true,
        })
        .collect()
}

/// New list with the entry `id` flipped; every other entry is carried over as-is
pub fn toggle_selection(shops: &[SelectableShop], id: &str) -> Vec<SelectableShop> {
    shops
        .iter()
        .map(|entry| {
            if entry.shop.id == id {
                SelectableShop {
                    shop: Arc::clone(&entry.shop),
                    selected: !entry.selected,
                }
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// State of one search-and-export session
#[derive(Debug, Default)]
pub struct SearchView {
    city_input: String,
    shops: Vec<SelectableShop>,
    loading: bool,
    error: Option<String>,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_city_input(&mut self, text: impl Into<String>) {
        self.city_input = text.into();
    }

    pub fn city_input(&self) -> &str {
        &self.city_input
    }

    pub fn shops(&self) -> &[SelectableShop] {
        &self.shops
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_count(&self) -> usize {
        self.shops.iter().filter(|entry| entry.selected).count()
    }

    /// Start a search
    /// DOCUMENTATION: Blank input is refused with EmptyCity and leaves the state
    /// untouched. Otherwise marks the view as loading, clears the last error and
    /// returns the trimmed city to fetch.
    pub fn begin_search(&mut self) -> Result<String, ViewError> {
        let city = self.city_input.trim();
        if city.is_empty() {
            return Err(ViewError::EmptyCity);
        }

        let city = city.to_string();
        self.loading = true;
        self.error = None;
        Ok(city)
    }

    /// Apply the outcome of a search
    /// DOCUMENTATION: Success replaces the list; failure records the message and
    /// keeps whatever was shown before. Loading is cleared either way.
    pub fn finish_search(&mut self, result: Result<Vec<Shop>, ClientError>) -> Result<usize, ViewError> {
        self.loading = false;

        match result {
            Ok(shops) => {
                self.shops = select_contactable(shops);
                Ok(self.shops.len())
            }
            Err(e) => {
                log::error!("Error fetching shops: {}", e);
                let message = e.to_string();
                self.error = Some(message.clone());
                Err(ViewError::Fetch(message))
            }
        }
    }

    /// Run a full search with the given fetcher
    /// DOCUMENTATION: The fetcher is not called when the input is blank.
    pub async fn submit<F, Fut>(&mut self, fetch: F) -> Result<usize, ViewError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<Shop>, ClientError>>,
    {
        let city = self.begin_search()?;
        let result = fetch(city).await;
        self.finish_search(result)
    }

    /// Flip the selection of one entry
    pub fn toggle(&mut self, id: &str) {
        self.shops = toggle_selection(&self.shops, id);
    }

    /// CSV of the selected entries
    pub fn export(&self) -> Result<CsvExport, ExportError> {
        export_selected(&self.shops)
    }
}
