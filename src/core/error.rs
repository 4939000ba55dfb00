use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Description surfaced to callers in the `detail` field.
    ///
    /// Backend faults carry the underlying driver message verbatim; callers
    /// cannot tell an outage from a malformed query.
    pub fn detail(&self) -> String {
        match self {
            AppError::Database(e) => e.to_string(),
            AppError::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorBody::new(self.detail()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
