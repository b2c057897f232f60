// src/handlers/products.rs
use log::{error, info};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::config::ServerConfig;
use crate::models::ProductQuery;
use crate::services::{catalog, gold};

/// GET /products: load the catalog, price it against the current gold spot
/// price, apply the optional range filters, reply with the surviving views.
pub async fn get_products(
    query: ProductQuery,
    config: Arc<ServerConfig>,
) -> Result<Json, Rejection> {
    info!("Handling product listing request: {:?}", query);

    // A missing or malformed catalog file is a server error for this request.
    let products = catalog::load_products(&config.products_path).map_err(|e| {
        error!("Failed to load product catalog: {}", e);
        warp::reject::custom(ApiError::new(e.to_string()))
    })?;

    let gold_price = gold::price_per_gram_or_fallback(&config.gold_api_url).await;
    let views = catalog::filter_products(&products, gold_price, &query);

    info!(
        "Returning {} of {} products at {} USD/g",
        views.len(),
        products.len(),
        gold_price
    );
    Ok(warp::reply::json(&views))
}
