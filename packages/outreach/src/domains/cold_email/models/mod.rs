mod generated_email;
mod outcome;
mod selection;

pub use generated_email::GeneratedEmail;
pub use outcome::{ColdEmailOutcome, Delivery};
pub use selection::SelectionResult;
