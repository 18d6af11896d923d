use crate::model::{Product, ProductId, ProductQuery};
use crate::store::error::{ProductStoreError, ProductStoreResult};
use crate::store::traits::{ProductStorage, ProductStore};

/// Default `ProductStore`: every call re-reads the whole collection from
/// the underlying storage and scans it linearly. Nothing is cached.
#[derive(Debug)]
pub struct CatalogStore<S: ProductStorage> {
    storage: S,
}

impl<S: ProductStorage> CatalogStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[async_trait::async_trait]
impl<S: ProductStorage> ProductStore for CatalogStore<S> {
    async fn get_all(&self) -> ProductStoreResult<Vec<Product>> {
        Ok(self.storage.read_all().await?)
    }

    async fn get_by_id(&self, id: ProductId) -> ProductStoreResult<Product> {
        let products = self.storage.read_all().await?;

        products
            .into_iter()
            .find(|product| product.id == id)
            .ok_or(ProductStoreError::NotFound(id))
    }

    async fn search(&self, query: &ProductQuery) -> ProductStoreResult<Vec<Product>> {
        let products = self.storage.read_all().await?;

        Ok(products
            .into_iter()
            .filter(|product| query.matches(product))
            .collect())
    }
}
