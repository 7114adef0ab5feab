//! Submission transports.
//!
//! A transport opens one authenticated session per call, submits one message,
//! and closes the session before returning.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::error::Result;
use crate::MailerOptions;

#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Authenticate with `options` and submit `message`.
    async fn submit(&self, options: &MailerOptions, message: Message) -> Result<()>;
}

/// SMTP over implicit TLS (SMTPS), the way port 465 submission works.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransport;

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn submit(&self, options: &MailerOptions, message: Message) -> Result<()> {
        let credentials = Credentials::new(
            options.username.clone(),
            options.password.expose_secret().to_owned(),
        );

        // No connection pool: `send` connects, submits and quits before returning
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&options.smtp_host)?
            .port(options.smtp_port)
            .credentials(credentials)
            .build();

        let response = transport.send(message).await?;
        debug!(
            smtp_host = %options.smtp_host,
            code = %response.code(),
            "SMTP submission accepted"
        );

        Ok(())
    }
}
