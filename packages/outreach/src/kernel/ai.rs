// Agent runner backed by the OpenAI chat completions API
//
// One run is one completion: the agent's instructions go in the system
// message and the input in the user message.

use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};
use tracing::{info, warn};

use super::BaseAgentRunner;
use crate::config::Config;
use crate::domains::agents::{AgentOutput, AgentSpec};

#[derive(Debug, Clone)]
pub struct OpenAIAgentRunner {
    client: OpenAIClient,
}

impl OpenAIAgentRunner {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = OpenAIClient::new(config.openai_api_key.clone())
            .with_base_url(config.openai_base_url.clone())
            .with_timeout(config.agent_timeout)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl BaseAgentRunner for OpenAIAgentRunner {
    async fn run(&self, agent: &AgentSpec, input: &str) -> Result<AgentOutput> {
        let start = Instant::now();

        let request = ChatRequest::new(agent.model.clone())
            .message(Message::system(agent.instructions.clone()))
            .message(Message::user(input));

        let response = self.client.chat_completion(request).await.map_err(|e| {
            warn!(agent = %agent.name, model = %agent.model, error = %e, "Agent run failed");
            e
        })?;

        info!(
            agent = %agent.name,
            model = %agent.model,
            duration_ms = start.elapsed().as_millis(),
            output_len = response.content.len(),
            total_tokens = response.usage.map(|u| u.total_tokens),
            "Agent run complete"
        );

        Ok(AgentOutput {
            agent_name: agent.name.clone(),
            final_output: response.content,
            usage: response.usage,
        })
    }
}
