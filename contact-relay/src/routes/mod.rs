//! HTTP routes for the relay

mod info;
mod send;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::email::EmailSender;
use crate::error::panic_response;
use crate::state::AppState;

pub use info::{HealthResponse, ServiceInfo};
pub use send::SendEmailResponse;

/// Create the router with all routes
pub fn create_router<E>(state: Arc<AppState<E>>) -> Router
where
    E: EmailSender + 'static,
{
    Router::new()
        .route("/", get(info::index))
        .route("/health", get(info::health))
        .route("/send-email", post(send::send_email))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
