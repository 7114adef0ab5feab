// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (which personas, which prompt) lives in the domains.
//
// Naming convention: Base* for trait names (e.g., BaseAgentRunner, BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::agents::{AgentOutput, AgentSpec};

// =============================================================================
// Agent Runner Trait (Infrastructure - one LLM persona, one input)
// =============================================================================

#[async_trait]
pub trait BaseAgentRunner: Send + Sync {
    /// Run `agent` against `input` and return its final output.
    ///
    /// Each call is independent; implementations keep no state between runs.
    async fn run(&self, agent: &AgentSpec, input: &str) -> Result<AgentOutput>;
}

// =============================================================================
// Notifier Trait (Infrastructure - outbound email)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver one message to `recipient`.
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<()>;
}
