mod agent_output;
mod agent_spec;

pub use agent_output::AgentOutput;
pub use agent_spec::AgentSpec;
