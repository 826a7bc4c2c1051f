//! Liveness and service description endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::email::EmailSender;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Local time, RFC 3339
    pub timestamp: String,
    pub email_service: &'static str,
}

/// GET /health
pub async fn health<E>(State(state): State<Arc<AppState<E>>>) -> Json<HealthResponse>
where
    E: EmailSender,
{
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        email_service: state.email_sender.service_name(),
    })
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET /
/// Describe the service and the operations it offers
pub async fn index<E>(State(state): State<Arc<AppState<E>>>) -> Json<ServiceInfo>
where
    E: EmailSender,
{
    let endpoints = BTreeMap::from([
        ("POST /send-email", "Send email from contact form"),
        ("GET /health", "Health check"),
    ]);

    Json(ServiceInfo {
        service: format!("Email Middleware ({})", state.email_sender.service_name()),
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
