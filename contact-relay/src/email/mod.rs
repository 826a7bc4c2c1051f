//! Delivery transports
//!
//! Every transport turns a [`Submission`] into one outbound email and reports
//! only whether that worked. Failure details are logged, never returned.

pub mod console;
pub mod message;
pub mod resend;
pub mod smtp;

pub use console::{ConsoleConfig, ConsoleEmailSender};
pub use message::ContactEmail;
pub use resend::{ResendConfig, ResendEmailSender, RESEND_API_URL};
pub use smtp::{SmtpConfig, SmtpEmailSender};

use crate::config::TransportConfig;
use crate::submission::Submission;

/// Trait for delivering contact-form submissions
///
/// Sending is synchronous; async callers run it on the blocking pool.
pub trait EmailSender: Send + Sync {
    /// Name of the delivery service, reported by the info endpoints
    fn service_name(&self) -> &'static str;

    /// Whether the credentials this sender needs are present
    fn is_configured(&self) -> bool {
        true
    }

    /// Deliver a submission, returning `true` on success
    fn send(&self, submission: &Submission) -> bool;
}

/// Allow using Box<dyn EmailSender> as an EmailSender
impl EmailSender for Box<dyn EmailSender> {
    fn service_name(&self) -> &'static str {
        (**self).service_name()
    }

    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn send(&self, submission: &Submission) -> bool {
        (**self).send(submission)
    }
}

/// Build the sender selected by configuration
///
/// The Resend sender owns a blocking HTTP client, so call this from a
/// blocking context.
pub fn sender_from_config(config: TransportConfig) -> Result<Box<dyn EmailSender>, String> {
    let sender: Box<dyn EmailSender> = match config {
        TransportConfig::Resend(resend) => Box::new(ResendEmailSender::new(resend)?),
        TransportConfig::Smtp(smtp) => Box::new(SmtpEmailSender::new(smtp)?),
        TransportConfig::Console(console) => Box::new(ConsoleEmailSender::new(console)),
    };

    tracing::info!(service = sender.service_name(), "Email transport ready");
    Ok(sender)
}
