/// One persona's draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEmail {
    /// Name of the agent that wrote it
    pub producer: String,
    pub text: String,
}
