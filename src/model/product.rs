use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Product identifier. Uniqueness is assumed by callers but never enforced.
pub type ProductId = i64;

/// A catalog entry. The same layout is used on the wire and in the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: DateTime<FixedOffset>, // RFC 3339, stored offset kept as-is
    pub price: f64,
}

/// Search criteria for `ProductStore::search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// `0` means "no filter"
    #[serde(default)]
    pub id: ProductId,
}

impl ProductQuery {
    pub fn by_id(id: ProductId) -> Self {
        Self { id }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.id == 0 || product.id == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let json = r#"{
            "id": 1,
            "name": "A",
            "quantity": 5,
            "code_value": "C1",
            "is_published": true,
            "expiration": "2024-01-01T00:00:00Z",
            "price": 9.99
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.code_value, "C1");
        assert!(product.is_published);
        assert_eq!(product.expiration.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let value = serde_json::to_value(&product).unwrap();
        for key in ["id", "name", "quantity", "code_value", "is_published", "expiration", "price"] {
            assert!(value.get(key).is_some(), "missing field {}", key);
        }
        assert_eq!(value["expiration"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_expiration_offset_survives_round_trip() {
        let json = r#"{"id": 7, "name": "B", "quantity": 0, "code_value": "X", "is_published": false,
            "expiration": "2024-06-30T12:00:00+02:00", "price": 1.5}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.expiration.offset().local_minus_utc(), 2 * 3600);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["expiration"], "2024-06-30T12:00:00+02:00");
    }

    #[test]
    fn test_zero_query_matches_everything() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 3, "name": "C", "quantity": 1, "code_value": "C3",
            "is_published": true, "expiration": "2025-01-01T00:00:00Z", "price": 2.0
        }))
        .unwrap();

        assert!(ProductQuery::default().matches(&product));
        assert!(ProductQuery::by_id(3).matches(&product));
        assert!(!ProductQuery::by_id(4).matches(&product));
    }
}
