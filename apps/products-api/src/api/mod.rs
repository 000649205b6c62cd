//! API routes module

pub mod health;

use axum::{routing::get, Router};
use domain_products::{handlers, PgProductRepository, ProductService};

use crate::state::AppState;

/// Versioned product routes; `create_router` mounts them under `/api`
pub fn routes(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service)
}

/// `/ready`, backed by a PostgreSQL round trip
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
