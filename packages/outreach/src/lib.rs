// Outreach - LLM personas that write motivational quotes and cold sales emails
//
// Agents are run through the kernel's BaseAgentRunner seam (OpenAI in
// production, mocks in tests). Outbound mail goes through BaseNotifier.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
