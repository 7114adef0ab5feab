//! End-to-end cold email run.

use tracing::{info, warn};

use super::{generate_emails, pick_best_email};
use crate::common::{OutreachError, Result};
use crate::domains::cold_email::models::{ColdEmailOutcome, Delivery};
use crate::domains::cold_email::personas::{
    sales_agents, sales_manager, DEFAULT_PROMPT, DEFAULT_SUBJECT,
};
use crate::kernel::OutreachDeps;

#[derive(Debug, Clone)]
pub struct ColdEmailRequest {
    /// Prompt every sales persona receives
    pub prompt: String,
    /// Mail the selected email here when set
    pub recipient: Option<String>,
    pub subject: String,
}

impl Default for ColdEmailRequest {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            recipient: None,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

/// Generate drafts, have the manager pick one, and optionally mail it.
///
/// A requested send without a configured notifier is rejected before any
/// agent runs. A send that fails is logged and reported in
/// [`Delivery::Failed`]; it does not fail the run.
pub async fn run_cold_email(
    deps: &OutreachDeps,
    request: &ColdEmailRequest,
) -> Result<ColdEmailOutcome> {
    let notifier = match (&request.recipient, &deps.notifier) {
        (Some(_), None) => {
            return Err(OutreachError::Config(
                "a recipient was given but no email sender is configured".into(),
            ))
        }
        (_, notifier) => notifier.clone(),
    };

    let agents = sales_agents(&deps.agent_model);
    let emails = generate_emails(deps.runner.as_ref(), &agents, &request.prompt).await?;

    let manager = sales_manager(&deps.agent_model, emails.len());
    let selection = pick_best_email(deps.runner.as_ref(), &manager, &emails).await?;

    let delivery = match (&request.recipient, notifier) {
        (Some(recipient), Some(notifier)) => {
            match notifier
                .send(&request.subject, &selection.text, recipient)
                .await
            {
                Ok(()) => {
                    info!(recipient = %recipient, "Selected cold email sent");
                    Delivery::Sent {
                        recipient: recipient.clone(),
                    }
                }
                Err(e) => {
                    warn!(recipient = %recipient, error = %e, "Failed to send selected cold email");
                    Delivery::Failed {
                        recipient: recipient.clone(),
                        reason: format!("{:#}", e),
                    }
                }
            }
        }
        _ => Delivery::NotRequested,
    };

    Ok(ColdEmailOutcome {
        emails,
        selection,
        delivery,
    })
}
