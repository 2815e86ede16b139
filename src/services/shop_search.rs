// src/services/shop_search.rs
// DOCUMENTATION: Shop search aggregator
// PURPOSE: Page through the places text search and flatten the results

use crate::errors::ShopsError;
use crate::models::{Shop, ShopPage};
use crate::services::PlacesClient;
use std::future::Future;

/// Hard cap on upstream requests per search
pub const MAX_PAGES: usize = 5;

/// Business type searched for in every city
pub const BUSINESS_TYPE: &str = "t-shirt printer or corporate t-shirt supplier";

/// Country appended to every query
pub const COUNTRY: &str = "India";

/// Build the text query for a city
pub fn text_query(city: &str) -> String {
    format!("{} in {}, {}", BUSINESS_TYPE, city, COUNTRY)
}

/// Drive a paginated fetch to completion
/// DOCUMENTATION: Calls `fetch_page` sequentially, first with no token and then
/// with the token returned by the previous page. Stops when:
/// - `max_pages` requests have been made
/// - a page comes back with no results
/// - a page has no (or an empty) next page token
///
/// Any error aborts the whole run; pages gathered so far are dropped.
pub async fn collect_pages<F, Fut, E>(max_pages: usize, mut fetch_page: F) -> Result<Vec<Shop>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ShopPage, E>>,
{
    let mut shops = Vec::new();
    let mut page_token: Option<String> = None;

    for page_number in 1..=max_pages {
        let page = fetch_page(page_token.take()).await?;

        if page.places.is_empty() {
            log::debug!("Page {} returned no results, stopping", page_number);
            break;
        }

        log::debug!("Page {}: {} results", page_number, page.places.len());
        shops.extend(page.places);

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(shops)
}

/// Aggregator over the places API
pub struct ShopSearch;

impl ShopSearch {
    /// Search shops in a city
    /// DOCUMENTATION: Rejects blank cities before any request is made, then pages
    /// through at most MAX_PAGES of results.
    ///
    /// # Arguments
    /// * `client` - Places API client
    /// * `city` - City name, trimmed before use
    ///
    /// # Returns
    /// All shops in arrival order, including ones without a phone number
    pub async fn search_city(client: &PlacesClient, city: &str) -> Result<Vec<Shop>, ShopsError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ShopsError::CityRequired);
        }

        let query = text_query(city);
        let query = query.as_str();

        log::info!("Searching shops: {}", query);

        let shops = collect_pages(MAX_PAGES, move |token| client.search_text(query, token)).await?;

        log::info!("Found {} shops in {}", shops.len(), city);
        Ok(shops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DisplayName;
    use std::cell::RefCell;
    use tokio_test::{assert_err, assert_ok};

    fn shop(id: &str) -> Shop {
        Shop {
            id: id.to_string(),
            display_name: DisplayName {
                text: format!("Shop {}", id),
                language_code: None,
            },
            national_phone_number: None,
        }
    }

    fn page(ids: &[&str], next: Option<&str>) -> ShopPage {
        ShopPage {
            places: ids.iter().map(|id| shop(id)).collect(),
            next_page_token: next.map(str::to_string),
        }
    }

    fn ids(shops: &[Shop]) -> Vec<&str> {
        shops.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_text_query() {
        assert_eq!(
            text_query("Tiruppur"),
            "t-shirt printer or corporate t-shirt supplier in Tiruppur, India"
        );
    }

    #[tokio::test]
    async fn test_stops_on_empty_first_page() {
        let calls = RefCell::new(Vec::new());

        let result: Result<Vec<Shop>, ShopsError> = collect_pages(MAX_PAGES, |token| {
            calls.borrow_mut().push(token);
            async { Ok(ShopPage::default()) }
        })
        .await;

        assert!(assert_ok!(result).is_empty());
        assert_eq!(calls.into_inner(), vec![None]);
    }

    #[tokio::test]
    async fn test_follows_tokens_in_order() {
        let calls = RefCell::new(Vec::new());

        let result: Result<Vec<Shop>, ShopsError> = collect_pages(MAX_PAGES, |token| {
            calls.borrow_mut().push(token.clone());
            let next = match token.as_deref() {
                None => page(&["a", "b"], Some("t2")),
                Some("t2") => page(&["c"], Some("t3")),
                _ => page(&["d"], None),
            };
            async move { Ok(next) }
        })
        .await;

        let shops = assert_ok!(result);
        assert_eq!(ids(&shops), vec!["a", "b", "c", "d"]);
        assert_eq!(
            calls.into_inner(),
            vec![None, Some("t2".to_string()), Some("t3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_caps_at_max_pages() {
        let mut count = 0usize;

        let result: Result<Vec<Shop>, ShopsError> = collect_pages(MAX_PAGES, |_| {
            count += 1;
            let id = format!("s{}", count);
            let next = page(&[id.as_str()], Some("more"));
            async move { Ok(next) }
        })
        .await;

        assert_eq!(assert_ok!(result).len(), MAX_PAGES);
        assert_eq!(count, MAX_PAGES);
    }

    #[tokio::test]
    async fn test_empty_token_ends_pagination() {
        let mut count = 0usize;

        let result: Result<Vec<Shop>, ShopsError> = collect_pages(MAX_PAGES, |_| {
            count += 1;
            async { Ok(page(&["a"], Some(""))) }
        })
        .await;

        assert_eq!(assert_ok!(result).len(), 1);
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_error_discards_collected_pages() {
        let mut count = 0usize;

        let result: Result<Vec<Shop>, ShopsError> = collect_pages(MAX_PAGES, |_| {
            count += 1;
            let outcome = if count < 3 {
                Ok(page(&["x"], Some("next")))
            } else {
                Err(ShopsError::ExternalApiError("boom".to_string()))
            };
            async move { outcome }
        })
        .await;

        assert_err!(result);
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_search_city_rejects_blank_city() {
        // Unroutable base URL: any request would fail with ExternalApiError
        let client = PlacesClient::new("k".to_string(), "http://127.0.0.1:9".to_string());
        let err = ShopSearch::search_city(&client, "   ").await.unwrap_err();
        assert!(matches!(err, ShopsError::CityRequired));
    }
}
