use super::{GeneratedEmail, SelectionResult};

/// What happened to the selected email after it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// No recipient was given
    NotRequested,
    Sent { recipient: String },
    /// The send was attempted and failed; the workflow itself still succeeded
    Failed { recipient: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct ColdEmailOutcome {
    /// Every draft, in persona order
    pub emails: Vec<GeneratedEmail>,
    pub selection: SelectionResult,
    pub delivery: Delivery,
}
