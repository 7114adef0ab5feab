use openai_client::Usage;

/// Result of running one agent against one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutput {
    pub agent_name: String,
    /// The model's final text reply
    pub final_output: String,
    pub usage: Option<Usage>,
}

impl AgentOutput {
    pub fn new(agent_name: impl Into<String>, final_output: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            final_output: final_output.into(),
            usage: None,
        }
    }
}
