use crate::model::ProductId;
use thiserror::Error;

/// Failures of the backing storage. All of them are storage-internal.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("internal storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal storage error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProductStoreError {
    #[error("{0}")]
    Internal(#[from] StorageError),

    #[error("product not found: {0}")]
    NotFound(ProductId),
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type ProductStoreResult<T> = Result<T, ProductStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_message_is_not_repeated() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ProductStoreError::from(StorageError::from(io));

        assert_eq!(err.to_string(), "internal storage error: no such file");
    }
}
