use serde::{Deserialize, Serialize};

/// A named persona: instructions plus the model that plays it.
///
/// Two specs are the same agent when all three fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub instructions: String,
    pub model: String,
}

impl AgentSpec {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: model.into(),
        }
    }

    /// Same persona on a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
