use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::handlers;
use crate::api::middleware::{handle_panic, log_requests};
use crate::store::traits::ProductStore;

pub fn create_router<S: ProductStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Products
        .route("/api/v1/products", get(handlers::list_products::<S>))
        .route("/api/v1/products/", get(handlers::list_products::<S>))
        .route(
            "/api/v1/products/search",
            get(handlers::search_products::<S>),
        )
        .route("/api/v1/products/:id", get(handlers::get_product::<S>))
        .layer(middleware::from_fn(log_requests))
        .layer(CatchPanicLayer::custom(handle_panic))
}
