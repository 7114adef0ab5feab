//! Testing utilities.
//!
//! [`RecordingTransport`] stands in for SMTP so callers can assert on what
//! would have been submitted without opening a network connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lettre::Message;

use crate::error::{MailerError, Result};
use crate::transport::MailTransport;
use crate::MailerOptions;

/// One submission seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub struct Submission {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Login used to authenticate the session
    pub username: String,
    pub from: Option<String>,
    pub to: Vec<String>,
    /// RFC 5322 rendering of the message
    pub formatted: String,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    submissions: Arc<Mutex<Vec<Submission>>>,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission fails with a transport error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of sessions opened (one per submission attempt).
    pub fn session_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn submit(&self, options: &MailerOptions, message: Message) -> Result<()> {
        let envelope = message.envelope();
        let submission = Submission {
            smtp_host: options.smtp_host.clone(),
            smtp_port: options.smtp_port,
            username: options.username.clone(),
            from: envelope.from().map(|a| a.to_string()),
            to: envelope.to().iter().map(|a| a.to_string()).collect(),
            formatted: String::from_utf8_lossy(&message.formatted()).into_owned(),
        };
        self.submissions.lock().unwrap().push(submission);

        match &self.failure {
            Some(reason) => Err(MailerError::Transport(reason.clone())),
            None => Ok(()),
        }
    }
}
