// Common types shared across domains

pub mod error;

pub use error::{AgentFailure, OutreachError, Result};
