use crate::model::{Product, ProductId, ProductQuery};
use crate::store::error::{ProductStoreResult, StorageResult};

/// Whole-collection persistence for products
#[async_trait::async_trait]
pub trait ProductStorage: Send + Sync {
    /// Read every product from the backing storage
    async fn read_all(&self) -> StorageResult<Vec<Product>>;
    /// Replace the backing storage contents with `products`
    async fn write_all(&self, products: &[Product]) -> StorageResult<()>;
}

/// Domain-level product operations used by the HTTP layer
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_all(&self) -> ProductStoreResult<Vec<Product>>;
    /// First product with the given id
    async fn get_by_id(&self, id: ProductId) -> ProductStoreResult<Product>;
    /// Products matching `query`; an empty result is not an error
    async fn search(&self, query: &ProductQuery) -> ProductStoreResult<Vec<Product>>;
}
