// src/handlers/shops.rs
// DOCUMENTATION: HTTP handlers for shop search
// PURPOSE: Parse the city, run the aggregator, return the flat shop list

use crate::config::Config;
use crate::errors::ShopsError;
use crate::models::CityPath;
use crate::services::{PlacesClient, ShopSearch};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /api/shops/{city}
/// Search t-shirt printers and suppliers in a city
///
/// DOCUMENTATION: Returns every shop found (with or without a phone number).
/// Upstream failures on any page are logged and reported as a fixed 500.
pub async fn get_shops(
    config: web::Data<Config>,
    path: web::Path<CityPath>,
) -> Result<impl Responder, ShopsError> {
    let params = path.into_inner();

    if let Err(e) = params.validate() {
        log::warn!("Rejected shop search with blank city: {}", e);
        return Err(ShopsError::CityRequired);
    }

    let client = PlacesClient::new(config.api_key(), config.places_base_url.clone());

    let shops = ShopSearch::search_city(&client, &params.city)
        .await
        .map_err(|e| {
            log::error!("Error fetching shops for {}: {}", params.city, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(shops))
}

/// GET /api/shops
/// Path without a city segment
pub async fn missing_city() -> Result<HttpResponse, ShopsError> {
    log::warn!("Rejected shop search without city");
    Err(ShopsError::CityRequired)
}

/// Configuration for shop routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/shops")
            .route("", web::get().to(missing_city))
            .route("/", web::get().to(missing_city))
            .route("/{city}", web::get().to(get_shops)),
    );
}
