//! Outreach dependencies for domain actions (using traits for testability)
//!
//! All external services sit behind trait abstractions so tests can swap in
//! the mocks from `test_dependencies`.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mailer::{MailTransport, MailerError, MailerOptions, MailerService, SmtpTransport};

use super::{BaseAgentRunner, BaseNotifier, OpenAIAgentRunner};
use crate::common::OutreachError;
use crate::config::Config;

// =============================================================================
// MailerService Adapter (implements BaseNotifier trait)
// =============================================================================

/// Wrapper around MailerService that implements BaseNotifier trait
pub struct MailerAdapter<T = SmtpTransport>(pub Arc<MailerService<T>>);

impl<T: MailTransport> MailerAdapter<T> {
    pub fn new(service: Arc<MailerService<T>>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl<T: MailTransport + 'static> BaseNotifier for MailerAdapter<T> {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<()> {
        self.0.send(subject, body, recipient).await?;
        Ok(())
    }
}

// =============================================================================
// OutreachDeps
// =============================================================================

/// Dependencies accessible to domain actions
#[derive(Clone)]
pub struct OutreachDeps {
    pub runner: Arc<dyn BaseAgentRunner>,
    /// Present only when outbound mail is configured
    pub notifier: Option<Arc<dyn BaseNotifier>>,
    /// Model used for every persona
    pub agent_model: String,
}

impl OutreachDeps {
    pub fn new(runner: Arc<dyn BaseAgentRunner>, agent_model: impl Into<String>) -> Self {
        Self {
            runner,
            notifier: None,
            agent_model: agent_model.into(),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn BaseNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build production dependencies. No network activity happens here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let runner = OpenAIAgentRunner::from_config(config)?;
        Ok(Self::new(Arc::new(runner), config.agent_model.clone()))
    }

    /// Attach the SMTP notifier, reading sender credentials from the environment.
    ///
    /// Fails with [`OutreachError::Config`] when `EMAIL_USER` or `EMAIL_PASS` is missing.
    pub fn with_smtp_notifier_from_env(self) -> std::result::Result<Self, OutreachError> {
        let options = MailerOptions::from_env().map_err(|e| match e {
            MailerError::Config(message) => OutreachError::Config(message),
            other => OutreachError::Config(other.to_string()),
        })?;
        let adapter = MailerAdapter::new(Arc::new(MailerService::new(options)));
        Ok(self.with_notifier(Arc::new(adapter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockAgentRunner;

    #[test]
    fn test_smtp_notifier_without_credentials_is_a_config_error() {
        std::env::remove_var("EMAIL_USER");
        std::env::remove_var("EMAIL_PASS");

        let deps = OutreachDeps::new(Arc::new(MockAgentRunner::new()), "gpt-4o-mini");
        let err = deps.with_smtp_notifier_from_env().err().unwrap();

        assert!(matches!(err, OutreachError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing EMAIL_USER or EMAIL_PASS in environment variables"
        );
        assert_eq!(err.to_string().matches("Configuration error").count(), 1);
    }
}
