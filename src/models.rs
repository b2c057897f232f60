// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry as stored in the backing JSON file. `popularity_score`
/// is the raw stored value in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub images: Vec<String>,
    pub weight: f64,
    #[serde(rename = "popularityScore")]
    pub popularity_score: f64,
}

/// The response shape for a single product. `popularity_score` here is the
/// rescaled 0-5 value, serialized under the same `popularityScore` key the
/// stored raw value uses; existing clients depend on that key.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub name: String,
    pub images: Vec<String>,
    pub weight: f64,
    #[serde(rename = "popularityScore")]
    pub popularity_score: f64,
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

/// Query parameters for the product listing. Missing or non-numeric values
/// deserialize to `None` (no constraint), never to a request error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_popularity: Option<f64>,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parses_numeric_values() {
        let q: ProductQuery =
            serde_json::from_str(r#"{"min_price": "100.5", "max_price": "250"}"#).unwrap();
        assert_eq!(q.min_price, Some(100.5));
        assert_eq!(q.max_price, Some(250.0));
        assert_eq!(q.min_popularity, None);
    }

    #[test]
    fn query_treats_non_numeric_values_as_absent() {
        let q: ProductQuery =
            serde_json::from_str(r#"{"min_price": "abc", "min_popularity": ""}"#).unwrap();
        assert_eq!(q.min_price, None);
        assert_eq!(q.min_popularity, None);
    }

    #[test]
    fn query_with_no_parameters_has_no_constraints() {
        let q: ProductQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.min_price, None);
        assert_eq!(q.max_price, None);
        assert_eq!(q.min_popularity, None);
    }

    #[test]
    fn product_deserializes_from_catalog_schema() {
        let p: Product = serde_json::from_str(
            r#"{"name": "Ring", "images": ["https://cdn.example.com/ring.jpg"],
                "weight": 5.0, "popularityScore": 0.6}"#,
        )
        .unwrap();
        assert_eq!(p.name, "Ring");
        assert_eq!(p.weight, 5.0);
        assert_eq!(p.popularity_score, 0.6);
    }

    #[test]
    fn view_serializes_with_external_field_names() {
        let view = ProductView {
            name: "Ring".to_string(),
            images: vec!["https://cdn.example.com/ring.jpg".to_string()],
            weight: 5.0,
            popularity_score: 3.0,
            price_usd: 480.0,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["popularityScore"], 3.0);
        assert_eq!(json["priceUSD"], 480.0);
    }
}
