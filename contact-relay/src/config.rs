//! Relay configuration
//!
//! Everything is read once at startup from environment variables (a `.env`
//! file is honored) and handed to the router and the selected transport.

use thiserror::Error;

use crate::email::{ConsoleConfig, ResendConfig, SmtpConfig, RESEND_API_URL};

/// Port the HTTP server listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;
/// Display name used in the `From` header of API-sent mail
pub const DEFAULT_SENDER_NAME: &str = "Contact Form";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_CONSOLE_SENDER: &str = "contact-form@localhost";

/// Printed to stderr when startup configuration is rejected
pub const USAGE: &str = "\
Set the following environment variables:
- MAIL_TRANSPORT: resend (default), smtp or console

For MAIL_TRANSPORT=resend:
- RESEND_API_KEY: Your Resend API key
- SENDER_EMAIL: The verified sender email address
- SENDER_NAME (optional): The sender name (default: Contact Form)

For MAIL_TRANSPORT=smtp:
- SENDER_EMAIL: The mailbox used to log in and send
- SENDER_PASSWORD: Password or app password for SENDER_EMAIL
- SMTP_SERVER (optional): Mail relay host (default: smtp.gmail.com)
- SMTP_PORT (optional): Mail relay port (default: 587)

- PORT (optional): HTTP listen port (default: 5000)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid port: {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("Unknown MAIL_TRANSPORT {0:?} (expected resend, smtp or console)")]
    UnknownTransport(String),
}

/// Which delivery transport to use, with its settings
#[derive(Debug, Clone)]
pub enum TransportConfig {
    Resend(ResendConfig),
    Smtp(SmtpConfig),
    Console(ConsoleConfig),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Delivery transport selected by `MAIL_TRANSPORT`
    pub transport: TransportConfig,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Variables set to the empty string are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let port = |key: &'static str, default: u16| match get(key) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { name: key, value }),
            None => Ok(default),
        };

        let transport_name = get("MAIL_TRANSPORT")
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "resend".to_string());

        let transport = match transport_name.as_str() {
            "resend" => TransportConfig::Resend(ResendConfig {
                api_key: require("RESEND_API_KEY")?,
                sender_email: require("SENDER_EMAIL")?,
                sender_name: get("SENDER_NAME")
                    .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
                api_url: RESEND_API_URL.to_string(),
            }),
            "smtp" => TransportConfig::Smtp(SmtpConfig {
                sender_email: require("SENDER_EMAIL")?,
                sender_password: require("SENDER_PASSWORD")?,
                host: get("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
                port: port("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            }),
            "console" => TransportConfig::Console(ConsoleConfig {
                sender_email: get("SENDER_EMAIL")
                    .unwrap_or_else(|| DEFAULT_CONSOLE_SENDER.to_string()),
                sender_name: get("SENDER_NAME")
                    .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
            }),
            _ => return Err(ConfigError::UnknownTransport(transport_name)),
        };

        Ok(Self {
            port: port("PORT", DEFAULT_PORT)?,
            transport,
        })
    }
}
