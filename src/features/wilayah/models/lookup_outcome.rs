use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::shared::constants::NOT_FOUND_MESSAGE;
use crate::shared::types::ErrorBody;

/// Result of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The companion field of the first matching record.
    Found(String),
    /// No record matched.
    NotFound,
    /// The persistence layer failed; carries the fault description.
    BackendFault(String),
}

impl LookupOutcome {
    /// Plain-string view: the value or the not-found sentinel, `Err` on fault.
    pub fn into_text(self) -> std::result::Result<String, String> {
        match self {
            LookupOutcome::Found(value) => Ok(value),
            LookupOutcome::NotFound => Ok(NOT_FOUND_MESSAGE.to_string()),
            LookupOutcome::BackendFault(detail) => Err(detail),
        }
    }
}

impl From<Result<Option<String>>> for LookupOutcome {
    fn from(result: Result<Option<String>>) -> Self {
        match result {
            Ok(Some(value)) => LookupOutcome::Found(value),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => LookupOutcome::BackendFault(e.detail()),
        }
    }
}

impl IntoResponse for LookupOutcome {
    fn into_response(self) -> Response {
        match self.into_text() {
            Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Err(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(detail)),
            )
                .into_response(),
        }
    }
}
