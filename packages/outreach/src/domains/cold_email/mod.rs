//! Cold email domain - several sales personas draft a cold email in
//! parallel, a manager persona picks one, and the pick can be mailed out.
//!
//! Flow: generate_emails → pick_best_email → (optional) notifier.

pub mod actions;
pub mod models;
pub mod personas;

pub use actions::{
    compose_selection_message, generate_emails, pick_best_email, run_cold_email,
    ColdEmailRequest, SELECTION_LABEL,
};
pub use models::{ColdEmailOutcome, Delivery, GeneratedEmail, SelectionResult};
pub use personas::{sales_agents, sales_manager, DEFAULT_PROMPT, DEFAULT_SUBJECT};
