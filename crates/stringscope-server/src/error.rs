//! Failure type for the HTTP handlers.
//!
//! Every failure renders as `{ "ok": false, "error": { "code", "message" } }`
//! with the status from [`ApiError::status`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use stringscope_core::StoreError;
use thiserror::Error;

use crate::dto::FilterError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, query string or value.
    #[error("{0}")]
    BadRequest(String),

    #[error("String not found.")]
    NotFound,

    /// Store or runtime failure; the detail is logged, not returned.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "ok": false,
            "error": { "code": self.code(), "message": self.to_string() },
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            return Self::NotFound;
        }
        tracing::error!(error = %err, "store failure");
        Self::Internal
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        Self::bad_request(err.to_string())
    }
}
