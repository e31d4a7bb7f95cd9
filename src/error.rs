use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Cafe {0} not found")]
    CafeNotFound(i64),

    #[error("A cafe named {0:?} already exists")]
    DuplicateName(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError to an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::CafeNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::DuplicateName(_) => (StatusCode::CONFLICT, self.to_string()),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".into()),
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Template error".into()),
            AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        if status.is_server_error() {
            tracing::error!(?self);
        } else {
            tracing::debug!(%self);
        }

        (status, error_message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
