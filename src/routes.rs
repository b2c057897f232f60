// src/routes.rs
use log::info;
use std::convert::Infallible;
use std::sync::Arc;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::config::ServerConfig;
use crate::handlers::error::ApiError;
use crate::handlers::products::get_products;
use crate::models::ProductQuery;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = api_error.message.clone();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let index_file = config.static_dir.join("index.html");
    let config_filter = warp::any().map(move || config.clone());

    let index_route = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(index_file));

    let products_route = warp::path("products")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ProductQuery>())
        .and(config_filter.clone())
        .and_then(get_products);

    info!("All routes configured successfully.");

    index_route.or(products_route).recover(handle_rejection)
}
