//! Agents domain - named LLM personas and what a run of one produces.
//!
//! Running an agent is delegated to `kernel::BaseAgentRunner`; this domain
//! only owns the values passed in and out.

pub mod models;

pub use models::{AgentOutput, AgentSpec};
