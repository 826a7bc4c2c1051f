//! SMTP-based email sender

use std::fmt;

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, Message, SmtpTransport, Transport,
};

use super::{ContactEmail, EmailSender};
use crate::submission::Submission;

/// Configuration for SMTP submission
#[derive(Clone)]
pub struct SmtpConfig {
    /// SMTP relay host (e.g., "smtp.gmail.com")
    pub host: String,
    /// SMTP relay port, upgraded with STARTTLS (typically 587)
    pub port: u16,
    /// Login and envelope sender
    pub sender_email: String,
    /// Password (or app password) for `sender_email`
    pub sender_password: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"<redacted>")
            .finish()
    }
}

/// Submits contact emails directly to an SMTP relay
///
/// lettre is built without connection pooling, so every send opens,
/// upgrades, authenticates and closes its own session.
pub struct SmtpEmailSender {
    transport: SmtpTransport,
    sender_email: String,
}

impl SmtpEmailSender {
    /// Create a new SMTP sender; no connection is made until the first send
    pub fn new(config: SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.sender_email.clone(), config.sender_password);

        let transport = SmtpTransport::starttls_relay(&config.host)
            .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
            .port(config.port)
            .credentials(creds)
            .build();

        tracing::info!(host = %config.host, port = config.port, "SMTP transport configured");

        Ok(Self {
            transport,
            sender_email: config.sender_email,
        })
    }

    /// Compose the email for `submission`; the submitter is the display name
    fn contact_email(&self, submission: &Submission) -> ContactEmail {
        ContactEmail::compose(submission.name(), &self.sender_email, submission)
    }

    fn build_message(&self, email: &ContactEmail) -> Result<Message, String> {
        let from_address: Address = email
            .from_email
            .parse()
            .map_err(|e| format!("Invalid from address: {}", e))?;
        let from = Mailbox::new(Some(email.from_name.clone()), from_address);

        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| format!("Invalid to address: {}", e))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.text.clone())
            .map_err(|e| format!("Failed to build email: {}", e))
    }

    fn deliver(&self, email: &ContactEmail) -> Result<(), String> {
        let message = self.build_message(email)?;

        self.transport
            .send(&message)
            .map_err(|e| format!("Failed to send email: {}", e))?;

        Ok(())
    }
}

impl EmailSender for SmtpEmailSender {
    fn service_name(&self) -> &'static str {
        "SMTP"
    }

    fn send(&self, submission: &Submission) -> bool {
        let email = self.contact_email(submission);

        match self.deliver(&email) {
            Ok(()) => {
                tracing::info!(
                    name = %submission.name(),
                    from = %submission.sender_email(),
                    to = %submission.target_email(),
                    "Email sent successfully"
                );
                true
            }
            Err(e) => {
                tracing::error!(error = %e, to = %submission.target_email(), "SMTP delivery failed");
                false
            }
        }
    }
}
