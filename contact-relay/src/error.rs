//! Relay error types

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::submission::SubmissionError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    InvalidSubmission(#[from] SubmissionError),

    #[error("Email transport is not configured")]
    Misconfigured,

    #[error("Email delivery failed")]
    DeliveryFailed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => RelayError::UnsupportedContentType,
            other => RelayError::MalformedBody(other.body_text()),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::UnsupportedContentType => (
                StatusCode::BAD_REQUEST,
                "Content-Type must be application/json".to_string(),
            ),
            RelayError::MalformedBody(detail) => {
                tracing::debug!(%detail, "Rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    "Request body must be a JSON object of string fields".to_string(),
                )
            }
            RelayError::InvalidSubmission(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RelayError::Misconfigured => {
                tracing::error!("Email transport configuration not properly set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server email configuration error".to_string(),
                )
            }
            RelayError::DeliveryFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email".to_string(),
            ),
            RelayError::Internal(msg) => {
                tracing::error!("Error processing request: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Turn a handler panic into the generic internal error response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    RelayError::Internal(format!("handler panicked: {}", detail)).into_response()
}
