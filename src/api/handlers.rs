use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::model::{Product, ProductId, ProductQuery};
use crate::store::error::ProductStoreError;
use crate::store::traits::ProductStore;

pub type AppState<S> = Arc<S>;

/// Uniform wrapper for every response body
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: Option<T>,
    pub error: bool,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: "OK".to_string(),
            data: Some(data),
            error: false,
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
            error: true,
        }
    }
}

pub type ApiError = (StatusCode, Json<Envelope<()>>);
pub type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

pub fn bad_request() -> ApiError {
    (StatusCode::BAD_REQUEST, Json(Envelope::failure("Bad Request")))
}

pub fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(Envelope::failure("Not Found")))
}

pub fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::failure("Internal Server Error")),
    )
}

impl From<ProductStoreError> for ApiError {
    fn from(err: ProductStoreError) -> Self {
        match err {
            ProductStoreError::NotFound(_) => not_found(),
            ProductStoreError::Internal(e) => {
                log::error!("Product storage failure: {}", e);
                internal_error()
            }
        }
    }
}

/// GET /api/v1/products/
pub async fn list_products<S: ProductStore>(
    State(store): State<AppState<S>>,
) -> ApiResult<Vec<Product>> {
    let products = store.get_all().await?;
    Ok(Json(Envelope::ok(products)))
}

/// GET /api/v1/products/{id}
/// Rejects a non-integer id with 400 before touching storage
pub async fn get_product<S: ProductStore>(
    State(store): State<AppState<S>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Product> {
    let Path(raw_id) = raw_id.map_err(|rejection| {
        log::debug!("Rejected product path: {}", rejection);
        bad_request()
    })?;
    let id: ProductId = raw_id.parse().map_err(|_| bad_request())?;

    let product = store.get_by_id(id).await?;
    Ok(Json(Envelope::ok(product)))
}

/// GET /api/v1/products/search?id=N
///
/// A missing or non-integer `id` means "no filter". Unlike the path lookup
/// this never answers 400. When `id` is repeated only the first one counts.
pub async fn search_products<S: ProductStore>(
    State(store): State<AppState<S>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Vec<Product>> {
    let query = parse_search_query(&params);

    let products = store.search(&query).await?;
    Ok(Json(Envelope::ok(products)))
}

fn parse_search_query(params: &[(String, String)]) -> ProductQuery {
    let first_id = params
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value);

    let id = match first_id {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::debug!("Ignoring non-integer search id {:?}", raw);
            0
        }),
        None => 0,
    };

    ProductQuery::by_id(id)
}
