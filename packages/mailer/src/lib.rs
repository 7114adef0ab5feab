//! Authenticated SMTP submission.
//!
//! ```rust,ignore
//! let mailer = MailerService::new(MailerOptions::from_env()?);
//! mailer.send("Best cold email", &body, "prospect@example.com").await?;
//! ```

pub mod error;
pub mod testing;
pub mod transport;

pub use error::{MailerError, Result};
pub use transport::{MailTransport, SmtpTransport};

use std::fmt;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::Message;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Sender identity and submission endpoint.
pub struct MailerOptions {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Sender address, also used as the SMTP login
    pub username: String,
    pub password: SecretString,
}

impl MailerOptions {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Read `EMAIL_USER`, `EMAIL_PASS`, `SMTP_HOST` and `SMTP_PORT` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (Some(username), Some(password)) = (non_empty("EMAIL_USER"), non_empty("EMAIL_PASS"))
        else {
            return Err(MailerError::Config(
                "Missing EMAIL_USER or EMAIL_PASS in environment variables".into(),
            ));
        };

        let smtp_port = match non_empty("SMTP_PORT") {
            Some(port) => port.parse().map_err(|_| {
                MailerError::Config(format!("SMTP_PORT is not a valid port: {}", port))
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            smtp_host: non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port,
            username,
            password: SecretString::from(password),
        })
    }

    pub fn with_host(mut self, host: impl Into<String>, port: u16) -> Self {
        self.smtp_host = host.into();
        self.smtp_port = port;
        self
    }
}

impl Clone for MailerOptions {
    fn clone(&self) -> Self {
        Self {
            smtp_host: self.smtp_host.clone(),
            smtp_port: self.smtp_port,
            username: self.username.clone(),
            password: SecretString::from(self.password.expose_secret().to_owned()),
        }
    }
}

impl fmt::Debug for MailerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailerOptions")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct MailerService<T = SmtpTransport> {
    options: MailerOptions,
    transport: T,
}

impl MailerService<SmtpTransport> {
    pub fn new(options: MailerOptions) -> Self {
        Self::with_transport(options, SmtpTransport)
    }
}

impl<T: MailTransport> MailerService<T> {
    pub fn with_transport(options: MailerOptions, transport: T) -> Self {
        Self { options, transport }
    }

    pub fn options(&self) -> &MailerOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one plain-text message from the configured sender to `to`.
    pub async fn send(&self, subject: &str, body: &str, to: &str) -> Result<()> {
        let message = self.build_message(subject, body, to)?;

        self.transport.submit(&self.options, message).await?;

        info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }

    fn build_message(&self, subject: &str, body: &str, to: &str) -> Result<Message> {
        let from: Mailbox = self.options.username.parse()?;
        let to: Mailbox = to.parse()?;

        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let options = MailerOptions::from_lookup(lookup(&[
            ("EMAIL_USER", "sales@example.com"),
            ("EMAIL_PASS", "app-password"),
        ]))
        .unwrap();

        assert_eq!(options.smtp_host, "smtp.gmail.com");
        assert_eq!(options.smtp_port, 465);
        assert_eq!(options.username, "sales@example.com");
        assert_eq!(options.password.expose_secret(), "app-password");
    }

    #[test]
    fn test_from_lookup_overrides_endpoint() {
        let options = MailerOptions::from_lookup(lookup(&[
            ("EMAIL_USER", "sales@example.com"),
            ("EMAIL_PASS", "app-password"),
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_PORT", "2465"),
        ]))
        .unwrap();

        assert_eq!(options.smtp_host, "mail.example.com");
        assert_eq!(options.smtp_port, 2465);
    }

    #[test]
    fn test_missing_password_is_config_error() {
        let err = MailerOptions::from_lookup(lookup(&[("EMAIL_USER", "sales@example.com")]))
            .unwrap_err();
        assert!(matches!(err, MailerError::Config(_)));
    }

    #[test]
    fn test_missing_user_is_config_error() {
        let err = MailerOptions::from_lookup(lookup(&[("EMAIL_PASS", "app-password")]))
            .unwrap_err();
        assert!(matches!(err, MailerError::Config(_)));
    }

    #[test]
    fn test_blank_user_is_config_error() {
        let err = MailerOptions::from_lookup(lookup(&[
            ("EMAIL_USER", "  "),
            ("EMAIL_PASS", "app-password"),
        ]))
        .unwrap_err();
        assert!(matches!(err, MailerError::Config(_)));
    }

    #[test]
    fn test_bad_port_is_config_error() {
        let err = MailerOptions::from_lookup(lookup(&[
            ("EMAIL_USER", "sales@example.com"),
            ("EMAIL_PASS", "app-password"),
            ("SMTP_PORT", "smtps"),
        ]))
        .unwrap_err();
        assert!(matches!(err, MailerError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let options = MailerOptions::new("sales@example.com", "hunter2");
        let rendered = format!("{:?}", options);

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("sales@example.com"));
    }
}
