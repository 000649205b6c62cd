use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{messages, ErrorResponse};

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    ErrorResponse::new(StatusCode::NOT_FOUND, messages::NOT_FOUND_RESOURCE).into_response()
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, messages::METHOD_NOT_ALLOWED)
        .into_response()
}
