//! The error envelope every endpoint answers with.
//!
//! Handlers and domain crates return [`AppError`] (or an error that converts
//! into it). The conversion to HTTP happens once, in
//! `IntoResponse for AppError`, which also logs the failure with its
//! [`ErrorCode`].

pub mod codes;
pub mod fields;
pub mod handlers;
pub mod messages;

pub use codes::ErrorCode;
pub use fields::{field_errors, pascal_case, FieldErrors};

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Uniform error body.
///
/// ```json
/// {
///   "statusCode": 400,
///   "message": "One or more validation errors occurred",
///   "errors": { "Name": ["'Name' must not be empty."] }
/// }
/// ```
///
/// `errors` is only present for validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Validation(errors) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    fields = ?errors.keys().collect::<Vec<_>>(),
                    "Validation error"
                );
                ErrorResponse::new(StatusCode::BAD_REQUEST, messages::VALIDATION_FAILED)
                    .with_errors(errors)
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new(StatusCode::BAD_REQUEST, msg)
            }
            AppError::InvalidUuid(raw) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidUuid.code(),
                    "UUID error: {}",
                    raw
                );
                ErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    format!("'{}' is not a valid UUID", raw),
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                ErrorResponse::new(StatusCode::BAD_REQUEST, e.body_text())
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query extraction error: {:?}",
                    e
                );
                ErrorResponse::new(StatusCode::BAD_REQUEST, e.body_text())
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                ErrorResponse::new(StatusCode::NOT_FOUND, msg)
            }
            AppError::Database(e) => {
                let code = database_error_code(&e);
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }
        };

        body.into_response()
    }
}

fn database_error_code(error: &DbErr) -> ErrorCode {
    match error {
        DbErr::ConnectionAcquire(_) => ErrorCode::DatabasePoolTimeout,
        DbErr::Conn(_) | DbErr::Exec(_) | DbErr::Query(_) => ErrorCode::DatabaseError,
        _ => ErrorCode::DatabaseUnhandled,
    }
}
