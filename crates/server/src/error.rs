//! Unified error handling with Sentry integration.
//!
//! Every failure a handler can produce is an [`AppError`]; its
//! `IntoResponse` impl is the single place where errors become HTTP status
//! codes and bodies. Only server errors are reported to Sentry.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use phonebook_core::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Body returned for a lookup or delete of an unknown id.
pub const NOT_FOUND_MESSAGE: &str = "This id person data not found";

/// Application-level error type for the phonebook server.
#[derive(Debug, Error)]
pub enum AppError {
    /// The store rejected a create (missing field or duplicate name).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No entry has the requested id.
    #[error("entry not found")]
    NotFound,

    /// No route matches the request.
    #[error("unknown endpoint")]
    UnknownEndpoint,

    /// The request body is not valid JSON for the expected shape.
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body, `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Store(err) => {
                tracing::debug!(error = %err, "Create rejected");
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string()))).into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            Self::UnknownEndpoint => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new("unknown endpoint")),
            )
                .into_response(),
            Self::MalformedBody(detail) => {
                tracing::debug!(%detail, "Rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody::new("malformed JSON body")),
                )
                    .into_response()
            }
            Self::Internal(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                // Don't expose internal error details to clients
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
