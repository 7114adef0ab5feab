mod generate;
mod select;
mod workflow;

pub use generate::generate_emails;
pub use select::{compose_selection_message, pick_best_email, SELECTION_LABEL};
pub use workflow::{run_cold_email, ColdEmailRequest};
