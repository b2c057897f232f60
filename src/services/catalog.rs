// src/services/catalog.rs
use log::info;
use std::error::Error as StdError;
use std::fs;
use std::path::Path;

use crate::models::{Product, ProductQuery, ProductView};

pub type Result<T> = std::result::Result<T, Box<dyn StdError + Send + Sync>>;

/// Read the full catalog from the backing file. Called fresh on every
/// request; the file is the sole source of truth for catalog contents.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let raw = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Derived USD price: (popularity + 1) x weight in grams x gold USD/gram,
/// rounded to cents.
pub fn price_usd(product: &Product, gold_price_per_gram: f64) -> f64 {
    round_to(
        (product.popularity_score + 1.0) * product.weight * gold_price_per_gram,
        2,
    )
}

/// Stored popularity rescaled from [0, 1] to a 0-5 score, one decimal.
pub fn popularity_score_5(product: &Product) -> f64 {
    round_to(product.popularity_score * 5.0, 1)
}

/// Compute derived fields for each product and apply the optional range
/// filters. Survivors keep their original file order; stored records are
/// never mutated.
pub fn filter_products(
    products: &[Product],
    gold_price_per_gram: f64,
    query: &ProductQuery,
) -> Vec<ProductView> {
    products
        .iter()
        .filter_map(|product| {
            let price = price_usd(product, gold_price_per_gram);
            let popularity = popularity_score_5(product);

            if let Some(min_price) = query.min_price {
                if price < min_price {
                    return None;
                }
            }
            if let Some(max_price) = query.max_price {
                if price > max_price {
                    return None;
                }
            }
            if let Some(min_popularity) = query.min_popularity {
                if popularity < min_popularity {
                    return None;
                }
            }

            Some(ProductView {
                name: product.name.clone(),
                images: product.images.clone(),
                weight: product.weight,
                popularity_score: popularity,
                price_usd: price,
            })
        })
        .collect()
}
