//! Domain error taxonomy.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OutreachError>;

#[derive(Debug, Error)]
pub enum OutreachError {
    /// A required setting is missing or invalid. Raised before any remote call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single agent invocation failed
    #[error("Agent '{agent}' failed: {message}")]
    RemoteCall { agent: String, message: String },

    /// At least one agent in a concurrent batch failed; no partial results are kept
    #[error("{} of {total} agent runs failed: {}", .failures.len(), summarize(.failures))]
    Batch {
        failures: Vec<AgentFailure>,
        total: usize,
    },

    #[error("No agents to run")]
    NoAgents,

    #[error("No candidate emails to choose from")]
    NoCandidates,
}

impl OutreachError {
    /// Wrap a runner failure, keeping the full cause chain in the message.
    pub fn remote(agent: impl Into<String>, err: anyhow::Error) -> Self {
        Self::RemoteCall {
            agent: agent.into(),
            message: format!("{:#}", err),
        }
    }
}

/// Which agent in a batch failed, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentFailure {
    /// Position in the batch
    pub index: usize,
    pub agent: String,
    pub message: String,
}

impl fmt::Display for AgentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{}): {}", self.agent, self.index, self.message)
    }
}

fn summarize(failures: &[AgentFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
