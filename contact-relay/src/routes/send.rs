//! Contact-form submission endpoint

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::email::EmailSender;
use crate::error::RelayError;
use crate::state::AppState;
use crate::submission::{ContactRequest, Submission};

#[derive(Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /send-email
/// Validate a contact-form submission and forward it as an email
pub async fn send_email<E>(
    State(state): State<Arc<AppState<E>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, RelayError>
where
    E: EmailSender + 'static,
{
    let Json(body) = payload?;

    // Only an object counts; serde would also map an array onto the fields by position
    let request: ContactRequest = match body {
        Value::Object(_) => serde_json::from_value(body)
            .map_err(|e| RelayError::MalformedBody(e.to_string()))?,
        _ => return Err(RelayError::MalformedBody("body is not a JSON object".to_string())),
    };

    let fields = request.require_fields()?;

    if !state.email_sender.is_configured() {
        return Err(RelayError::Misconfigured);
    }

    let submission = Submission::parse(fields)?;

    // Transports block on network I/O
    let sender = Arc::clone(&state.email_sender);
    let delivered = tokio::task::spawn_blocking(move || sender.send(&submission))
        .await
        .map_err(|e| RelayError::Internal(format!("Delivery task failed: {}", e)))?;

    if !delivered {
        return Err(RelayError::DeliveryFailed);
    }

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email sent successfully",
    }))
}
