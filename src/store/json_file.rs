use crate::model::Product;
use crate::store::error::StorageResult;
use crate::store::traits::ProductStorage;
use std::path::{Path, PathBuf};

/// Stores the product collection as a single JSON array in a file.
///
/// Reads and writes always cover the whole file. There is no locking, so a
/// writer racing a reader may expose a truncated file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ProductStorage for JsonFileStorage {
    async fn read_all(&self) -> StorageResult<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        log::debug!(
            "Read {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }

    async fn write_all(&self, products: &[Product]) -> StorageResult<()> {
        // Encode before touching the file so an encode failure leaves it intact
        let bytes = serde_json::to_vec(products)?;
        tokio::fs::write(&self.path, bytes).await?;
        log::debug!(
            "Wrote {} products to {}",
            products.len(),
            self.path.display()
        );
        Ok(())
    }
}
