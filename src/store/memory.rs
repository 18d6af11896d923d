use crate::model::Product;
use crate::store::error::StorageResult;
use crate::store::traits::ProductStorage;
use parking_lot::RwLock;

/// In-memory product storage, interchangeable with `JsonFileStorage`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    products: RwLock<Vec<Product>>,
}

impl MemoryStorage {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait::async_trait]
impl ProductStorage for MemoryStorage {
    async fn read_all(&self) -> StorageResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn write_all(&self, products: &[Product]) -> StorageResult<()> {
        *self.products.write() = products.to_vec();
        Ok(())
    }
}
