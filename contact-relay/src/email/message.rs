//! Composition of the outgoing contact email

use chrono::{Local, NaiveDateTime};

use crate::submission::Submission;

/// An email ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub from_name: String,
    pub from_email: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl ContactEmail {
    /// Compose the notification for `submission`, stamped with the local time
    pub fn compose(from_name: &str, from_email: &str, submission: &Submission) -> Self {
        Self::compose_at(from_name, from_email, submission, Local::now().naive_local())
    }

    pub fn compose_at(
        from_name: &str,
        from_email: &str,
        submission: &Submission,
        sent_at: NaiveDateTime,
    ) -> Self {
        let text = format!(
            "Contact Form Submission\n\
             \n\
             From: {}\n\
             Email: {}\n\
             Message:\n\
             {}\n\
             \n\
             ---\n\
             Sent at: {}",
            submission.name(),
            submission.sender_email(),
            submission.message(),
            sent_at.format("%Y-%m-%d %H:%M:%S"),
        );

        Self {
            from_name: from_name.to_string(),
            from_email: from_email.to_string(),
            to: submission.target_email().to_string(),
            // The submitter's name doubles as the subject line
            subject: submission.name().to_string(),
            text,
        }
    }

    /// `Name <address>` form of the sender
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}
