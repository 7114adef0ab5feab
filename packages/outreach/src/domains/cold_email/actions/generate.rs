//! Fan-out/fan-in draft generation.

use futures::future::join_all;
use tracing::{info, warn, Instrument};

use crate::common::{AgentFailure, OutreachError, Result};
use crate::domains::agents::{AgentOutput, AgentSpec};
use crate::domains::cold_email::models::GeneratedEmail;
use crate::kernel::{trace, BaseAgentRunner};

const TRACE_NAME: &str = "Parallel generate sales cold emails";

/// Run every agent against `message` concurrently and wait for all of them.
///
/// The result is aligned with `agents`: entry `i` was written by `agents[i]`,
/// whatever order the runs finished in. If any run fails the whole batch
/// fails and no drafts are returned.
pub async fn generate_emails(
    runner: &dyn BaseAgentRunner,
    agents: &[AgentSpec],
    message: &str,
) -> Result<Vec<GeneratedEmail>> {
    if agents.is_empty() {
        return Err(OutreachError::NoAgents);
    }

    async {
        info!(agent_count = agents.len(), "Generating cold emails");

        let results = join_all(agents.iter().map(|agent| runner.run(agent, message))).await;

        collect_batch(agents, results)
    }
    .instrument(trace(TRACE_NAME))
    .await
}

fn collect_batch(
    agents: &[AgentSpec],
    results: Vec<anyhow::Result<AgentOutput>>,
) -> Result<Vec<GeneratedEmail>> {
    let total = results.len();
    let mut emails = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for (index, (agent, result)) in agents.iter().zip(results).enumerate() {
        match result {
            Ok(output) => emails.push(GeneratedEmail {
                producer: agent.name.clone(),
                text: output.final_output,
            }),
            Err(e) => {
                warn!(agent = %agent.name, index, error = %e, "Cold email generation failed");
                failures.push(AgentFailure {
                    index,
                    agent: agent.name.clone(),
                    message: format!("{:#}", e),
                });
            }
        }
    }

    if !failures.is_empty() {
        return Err(OutreachError::Batch { failures, total });
    }

    info!(email_count = emails.len(), "Cold emails generated");
    Ok(emails)
}
