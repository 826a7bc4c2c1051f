//! Contact-form email relay
//!
//! Accepts contact-form submissions as JSON over HTTP, validates them and
//! forwards each one as an email through the Resend API or an SMTP relay,
//! so a static site never has to hold mail credentials.

pub mod config;
pub mod email;
pub mod error;
pub mod routes;
pub mod state;
pub mod submission;

pub use config::{Config, ConfigError, TransportConfig};
pub use email::{
    sender_from_config, ConsoleEmailSender, ContactEmail, EmailSender, ResendEmailSender,
    SmtpEmailSender,
};
pub use error::RelayError;
pub use state::AppState;
pub use submission::{ContactRequest, Submission, SubmissionError};
