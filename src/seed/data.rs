use crate::model::Product;
use crate::store::traits::ProductStorage;
use anyhow::Result;
use chrono::DateTime;

/// Small demonstration catalog
pub fn sample_products() -> Vec<Product> {
    let entries = [
        (1, "Oil - Margarine", 439, "S82254D", true, "2022-12-15T00:00:00Z", 71.42),
        (2, "Pineapple - Canned, Rings", 345, "M4637", true, "2021-09-23T00:00:00Z", 352.79),
        (3, "Wine - Red Pinot Noir", 208, "W3358", false, "2023-03-02T00:00:00Z", 18.5),
        (4, "Bread - Sour Batard", 12, "B7701X", true, "2024-01-01T00:00:00+01:00", 4.99),
        (5, "Cheese - Gouda", 0, "C1189", false, "2025-06-30T00:00:00Z", 12.0),
    ];

    entries
        .into_iter()
        .map(|(id, name, quantity, code, published, expiration, price)| Product {
            id,
            name: name.to_string(),
            quantity,
            code_value: code.to_string(),
            is_published: published,
            expiration: DateTime::parse_from_rfc3339(expiration)
                .expect("seed expiration must be RFC 3339"),
            price,
        })
        .collect()
}

/// Replace the storage contents with the demonstration catalog
pub async fn load_seed_data<S: ProductStorage>(storage: &S) -> Result<usize> {
    let products = sample_products();
    storage.write_all(&products).await?;
    log::info!("Seeded {} products", products.len());
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CatalogStore, JsonFileStorage, ProductStore};

    #[tokio::test]
    async fn test_seed_data_is_readable_through_catalog() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("seed.json"));

        let count = load_seed_data(&storage).await.unwrap();
        assert_eq!(count, 5);

        let store = CatalogStore::new(storage);
        assert_eq!(store.get_all().await.unwrap(), sample_products());
        let bread = store.get_by_id(4).await.unwrap();
        assert_eq!(bread.code_value, "B7701X");
        assert_eq!(bread.expiration.to_rfc3339(), "2024-01-01T00:00:00+01:00");
    }

    #[test]
    fn test_every_seed_row_is_kept() {
        let ids: Vec<_> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
