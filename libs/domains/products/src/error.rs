use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldErrors};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with ID {0} was not found")]
    NotFound(Uuid),

    #[error("One or more validation errors occurred")]
    Validation(FieldErrors),

    /// A caller broke a precondition the HTTP layer should have caught
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Product with ID {} was not found", id))
            }
            ProductError::Validation(errors) => AppError::Validation(errors),
            // No dedicated status: falls through to the generic 500
            ProductError::InvalidArgument(msg) => AppError::InternalServerError(msg),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
