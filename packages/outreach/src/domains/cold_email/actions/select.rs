//! Manager selection.

use tracing::{info, Instrument};

use crate::common::{OutreachError, Result};
use crate::domains::agents::AgentSpec;
use crate::domains::cold_email::models::{GeneratedEmail, SelectionResult};
use crate::kernel::{trace, BaseAgentRunner};

pub const SELECTION_LABEL: &str = "Cold emails:";

const TRACE_NAME: &str = "Pick the final email";

/// Build the manager's input: the label on its own line, then every draft
/// verbatim and in order, separated by a blank line.
pub fn compose_selection_message(emails: &[GeneratedEmail]) -> String {
    let bodies: Vec<&str> = emails.iter().map(|e| e.text.as_str()).collect();
    format!("{}\n{}\n", SELECTION_LABEL, bodies.join("\n\n"))
}

/// Ask `manager` to choose the best of `emails`. The reply is returned as-is.
pub async fn pick_best_email(
    runner: &dyn BaseAgentRunner,
    manager: &AgentSpec,
    emails: &[GeneratedEmail],
) -> Result<SelectionResult> {
    if emails.is_empty() {
        return Err(OutreachError::NoCandidates);
    }

    let message = compose_selection_message(emails);

    let output = runner
        .run(manager, &message)
        .instrument(trace(TRACE_NAME))
        .await
        .map_err(|e| OutreachError::remote(&manager.name, e))?;

    info!(
        candidates = emails.len(),
        selection_len = output.final_output.len(),
        "Manager picked a cold email"
    );

    Ok(SelectionResult {
        text: output.final_output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(producer: &str, text: &str) -> GeneratedEmail {
        GeneratedEmail {
            producer: producer.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_compose_exact_layout() {
        let message = compose_selection_message(&[
            email("Agent1", "First"),
            email("Agent2", "Second"),
            email("Agent3", "Third"),
        ]);

        assert_eq!(message, "Cold emails:\nFirst\n\nSecond\n\nThird\n");
    }

    #[test]
    fn test_compose_keeps_multiline_bodies_verbatim() {
        let first = "Subject: SOC 2 in weeks\n\nHi Dana,\nShort pitch.";
        let second = "Subject: Audits, but fun\n\nHey!";
        let message = compose_selection_message(&[email("Agent1", first), email("Agent2", second)]);

        assert_eq!(message.matches(SELECTION_LABEL).count(), 1);
        assert!(message.starts_with("Cold emails:\n"));

        let first_at = message.find(first).unwrap();
        let second_at = message.find(second).unwrap();
        assert!(first_at < second_at);
        assert_eq!(&message[first_at + first.len()..second_at], "\n\n");
    }
}
