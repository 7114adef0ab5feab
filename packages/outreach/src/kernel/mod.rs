//! Kernel module - infrastructure behind trait seams.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod trace;
pub mod traits;

pub use ai::OpenAIAgentRunner;
pub use deps::{MailerAdapter, OutreachDeps};
pub use test_dependencies::{
    MockAgentRunner, MockNotifier, RecordedRun, SentEmail, TestDependencies,
};
pub use trace::trace;
pub use traits::*;
