//! # Axum Helpers
//!
//! Shared plumbing for the catalog's Axum services.
//!
//! - **[`errors`]**: `AppError` and the `{statusCode, message, errors?}` envelope
//! - **[`extractors`]**: UUID path, validated JSON body, validated query
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: security headers middleware
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router(api_routes, health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    close_postgres, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse, FieldErrors};

pub use extractors::{UuidPath, ValidatedJson, ValidatedQuery};
