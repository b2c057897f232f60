// src/services/gold.rs
use log::{error, info};
use serde_json::Value;
use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, Box<dyn StdError + Send + Sync>>;

pub const DEFAULT_SPOT_URL: &str = "https://api.metals.live/v1/spot";

/// Grams per troy ounce, the unit the spot API quotes in.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Price per gram used whenever the live spot price cannot be fetched.
pub const FALLBACK_PRICE_PER_GRAM: f64 = 65.0;

/// Fetch the current gold spot price and convert it to USD per gram.
///
/// The endpoint returns a JSON array whose first element carries a numeric
/// `gold` field quoted per troy ounce. One GET per call, no caching.
pub async fn fetch_gold_price(url: &str) -> Result<f64> {
    info!("Fetching gold spot price from {}", url);
    let quotes: Value = reqwest::get(url).await?.json().await?;
    let per_ounce = gold_per_ounce(&quotes)?;
    Ok(per_ounce / TROY_OUNCE_GRAMS)
}

fn gold_per_ounce(quotes: &Value) -> Result<f64> {
    let per_ounce = quotes
        .get(0)
        .and_then(|quote| quote.get("gold"))
        .and_then(Value::as_f64)
        .ok_or("no numeric 'gold' field in spot price response")?;
    if per_ounce < 0.0 {
        return Err(format!("negative gold spot price: {}", per_ounce).into());
    }
    Ok(per_ounce)
}

/// Resolve the gold price for a request, substituting the fallback constant
/// when the live fetch fails. Fetch errors are logged, never surfaced.
pub async fn price_per_gram_or_fallback(url: &str) -> f64 {
    match fetch_gold_price(url).await {
        Ok(price) => price,
        Err(e) => {
            error!(
                "Gold price API error: {}; using fallback {} USD/g",
                e, FALLBACK_PRICE_PER_GRAM
            );
            FALLBACK_PRICE_PER_GRAM
        }
    }
}
