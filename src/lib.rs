pub mod api;
pub mod config;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

// Export store types
pub use store::{
    CatalogStore, JsonFileStorage, MemoryStorage, ProductStorage, ProductStore,
    ProductStoreError, StorageError,
};

use std::sync::Arc;
use tokio::net::TcpListener;

/// Build the file-backed store, seeding the file first when requested
pub async fn build_store(
    config: &crate::config::AppConfig,
) -> anyhow::Result<CatalogStore<JsonFileStorage>> {
    let storage = JsonFileStorage::new(config.storage_path()?);
    log::info!("Using product file {}", storage.path().display());

    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        if storage.path().exists() {
            log::info!("Product file already exists, skipping seed data");
        } else {
            seed::load_seed_data(&storage).await?;
        }
    }

    Ok(CatalogStore::new(storage))
}

/// Serve the product API on an already bound listener
pub async fn serve<S: ProductStore + 'static>(
    listener: TcpListener,
    store: Arc<S>,
) -> anyhow::Result<()> {
    let app: axum::Router = api::routes::create_router().with_state(store);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn run_server() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = crate::config::AppConfig::load()?;
    let store = Arc::new(build_store(&config).await?);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Product catalog running on http://{}", bind_address);

    serve(listener, store).await
}
