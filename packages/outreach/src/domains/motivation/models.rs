use std::fmt;

/// The motivator's answer, as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
