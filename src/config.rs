// src/config.rs
use log::warn;
use std::env;
use std::path::PathBuf;

use crate::services::gold::DEFAULT_SPOT_URL;

/// Server configuration, built once at startup and handed to the routing
/// layer. No global application state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub products_path: PathBuf,
    pub static_dir: PathBuf,
    pub gold_api_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port_str = env::var("PORT").unwrap_or_else(|_| {
            warn!("$PORT not set, defaulting to 3030");
            "3030".to_string()
        });
        let port: u16 = port_str.parse().expect("PORT must be a number");

        let products_path =
            PathBuf::from(env::var("PRODUCTS_PATH").unwrap_or_else(|_| "products.json".to_string()));
        let static_dir =
            PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));
        let gold_api_url =
            env::var("GOLD_API_URL").unwrap_or_else(|_| DEFAULT_SPOT_URL.to_string());

        ServerConfig {
            port,
            products_path,
            static_dir,
            gold_api_url,
        }
    }
}
