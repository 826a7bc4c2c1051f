//! Contact-form submissions
//!
//! A [`ContactRequest`] is whatever the client posted. It becomes a
//! [`Submission`] in two steps so that missing fields can be reported before
//! the transport configuration is checked, and malformed addresses after.

use serde::Deserialize;
use thiserror::Error;

/// Wire names of the required fields, in the order they are reported
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "message", "target_email"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid sender email format")]
    InvalidSenderEmail,

    #[error("Invalid target email format")]
    InvalidTargetEmail,
}

/// JSON body of `POST /send-email`
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub target_email: Option<String>,
}

/// All four fields present and non-blank, trimmed, not yet validated
#[derive(Debug, Clone)]
pub struct ContactFields {
    name: String,
    email: String,
    message: String,
    target_email: String,
}

impl ContactRequest {
    /// Trim every field and fail with the names of those left empty
    pub fn require_fields(self) -> Result<ContactFields, SubmissionError> {
        let values = [self.name, self.email, self.message, self.target_email]
            .map(|value| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()));

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| *field)
            .collect();

        match values {
            [Some(name), Some(email), Some(message), Some(target_email)] => Ok(ContactFields {
                name,
                email,
                message,
                target_email,
            }),
            _ => Err(SubmissionError::MissingFields(missing)),
        }
    }
}

/// A validated submission, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    sender_email: String,
    message: String,
    target_email: String,
}

impl Submission {
    /// Check both addresses and build the submission
    pub fn parse(fields: ContactFields) -> Result<Self, SubmissionError> {
        if !looks_like_email(&fields.email) {
            return Err(SubmissionError::InvalidSenderEmail);
        }
        if !looks_like_email(&fields.target_email) {
            return Err(SubmissionError::InvalidTargetEmail);
        }

        Ok(Self {
            name: fields.name,
            sender_email: fields.email,
            message: fields.message,
            target_email: fields.target_email,
        })
    }

    /// Submitter's name; also the subject line of the outgoing email
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sender_email(&self) -> &str {
        &self.sender_email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn target_email(&self) -> &str {
        &self.target_email
    }
}

impl TryFrom<ContactRequest> for Submission {
    type Error = SubmissionError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        Submission::parse(request.require_fields()?)
    }
}

/// Presence of `@` and `.`; deliberately not RFC 5322
fn looks_like_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}
