//! Quote of the day.

use tracing::{info, Instrument};

use crate::common::{OutreachError, Result};
use crate::domains::agents::AgentSpec;
use crate::domains::motivation::models::Quote;
use crate::kernel::{trace, BaseAgentRunner};

pub const QUOTE_PROMPT: &str = "Tell me a quotation of the day for motivation";

const MOTIVATOR_NAME: &str = "Motivator";
const MOTIVATOR_INSTRUCTIONS: &str = "You are a great philosopher";
const TRACE_NAME: &str = "Every Day Motivation";

/// The philosopher persona.
pub fn motivator(model: &str) -> AgentSpec {
    AgentSpec::new(MOTIVATOR_NAME, MOTIVATOR_INSTRUCTIONS, model)
}

/// Ask the motivator for today's quote.
pub async fn quote_of_the_day(runner: &dyn BaseAgentRunner, model: &str) -> Result<Quote> {
    let agent = motivator(model);

    let output = runner
        .run(&agent, QUOTE_PROMPT)
        .instrument(trace(TRACE_NAME))
        .await
        .map_err(|e| OutreachError::remote(&agent.name, e))?;

    info!(quote_len = output.final_output.len(), "Quote of the day received");

    Ok(Quote {
        text: output.final_output,
    })
}
