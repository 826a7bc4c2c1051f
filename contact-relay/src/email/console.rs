//! Console-based email sender for development

use super::{ContactEmail, EmailSender};
use crate::submission::Submission;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub sender_email: String,
    pub sender_name: String,
}

/// Email sender that prints to the console instead of delivering
pub struct ConsoleEmailSender {
    config: ConsoleConfig,
}

impl ConsoleEmailSender {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }
}

impl EmailSender for ConsoleEmailSender {
    fn service_name(&self) -> &'static str {
        "Console"
    }

    fn send(&self, submission: &Submission) -> bool {
        let email = ContactEmail::compose(
            &self.config.sender_name,
            &self.config.sender_email,
            submission,
        );

        println!();
        println!("========================================");
        println!("  FROM:    {}", email.from_header());
        println!("  TO:      {}", email.to);
        println!("  SUBJECT: {}", email.subject);
        println!("----------------------------------------");
        println!("{}", email.text);
        println!("========================================");
        println!();

        tracing::info!(to = %email.to, subject = %email.subject, "Contact email printed");

        true
    }
}
