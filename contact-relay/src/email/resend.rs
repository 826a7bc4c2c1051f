//! Resend HTTP API sender

use std::fmt;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;

use super::{ContactEmail, EmailSender};
use crate::submission::Submission;

/// Resend's send-email endpoint
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Configuration for the Resend API sender
#[derive(Clone)]
pub struct ResendConfig {
    /// Bearer token for the Resend API
    pub api_key: String,
    /// Verified sender address
    pub sender_email: String,
    /// Display name paired with `sender_email`
    pub sender_name: String,
    /// Endpoint to POST to; [`RESEND_API_URL`] outside of tests
    pub api_url: String,
}

impl fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &"<redacted>")
            .field("sender_email", &self.sender_email)
            .field("sender_name", &self.sender_name)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Serialize)]
struct SendEmailPayload<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Sends contact emails through the Resend API
pub struct ResendEmailSender {
    client: Client,
    config: ResendConfig,
}

impl ResendEmailSender {
    /// Create a new Resend sender
    ///
    /// Owns a blocking HTTP client: create, use and drop it off the async
    /// runtime threads.
    pub fn new(config: ResendConfig) -> Result<Self, String> {
        let client = Client::builder()
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    fn deliver(&self, email: &ContactEmail) -> Result<(), String> {
        let payload = SendEmailPayload {
            from: email.from_header(),
            to: [email.to.as_str()],
            subject: &email.subject,
            text: &email.text,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .map_err(|e| format!("Failed to send email via Resend: {}", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(format!("Resend error: {} - {}", status.as_u16(), body));
        }

        Ok(())
    }
}

impl EmailSender for ResendEmailSender {
    fn service_name(&self) -> &'static str {
        "Resend"
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty() && !self.config.sender_email.is_empty()
    }

    fn send(&self, submission: &Submission) -> bool {
        let email = ContactEmail::compose(
            &self.config.sender_name,
            &self.config.sender_email,
            submission,
        );

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
                tracing::error!(error = %e, to = %submission.target_email(), "Resend delivery failed");
                false
            }
        }
    }
}
