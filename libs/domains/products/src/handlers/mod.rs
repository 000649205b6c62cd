//! HTTP endpoints, mounted by the binary under `/api`.
//!
//! - `v1`: list, fetch, create, stock update and delete
//! - `v2`: paginated listing

use axum::Router;

use crate::repository::ProductRepository;
use crate::service::ProductService;

pub mod v1;
pub mod v2;

/// All product routes, versioned under `/v1/products` and `/v2/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .nest("/v1/products", v1::router(service.clone()))
        .nest("/v2/products", v2::router(service))
}
