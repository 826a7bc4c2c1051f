//! Shared application state

use std::sync::Arc;

use crate::email::EmailSender;

/// Relay application state
///
/// Immutable after startup; requests only read from it.
pub struct AppState<E: EmailSender> {
    /// Transport every validated submission is handed to
    pub email_sender: Arc<E>,
}

impl<E: EmailSender> AppState<E> {
    pub fn new(email_sender: E) -> Self {
        Self {
            email_sender: Arc::new(email_sender),
        }
    }
}
