use std::fmt;

/// The manager's reply, kept verbatim.
///
/// Not guaranteed to match any candidate: the manager may quote one, edit
/// one, or add commentary around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub text: String,
}

impl SelectionResult {
    /// Index of the candidate whose text appears verbatim in the reply, if any.
    pub fn matching_candidate(&self, candidates: &[super::GeneratedEmail]) -> Option<usize> {
        candidates
            .iter()
            .position(|c| !c.text.trim().is_empty() && self.text.contains(c.text.trim()))
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cold_email::models::GeneratedEmail;

    fn candidates() -> Vec<GeneratedEmail> {
        vec![
            GeneratedEmail {
                producer: "Agent1".into(),
                text: "Dear CTO, formal pitch.".into(),
            },
            GeneratedEmail {
                producer: "Agent2".into(),
                text: "Knock knock. Audit prep.".into(),
            },
        ]
    }

    #[test]
    fn test_matching_candidate_found() {
        let selection = SelectionResult {
            text: "The best one is:\n\nKnock knock. Audit prep.\n\nIt stands out.".into(),
        };
        assert_eq!(selection.matching_candidate(&candidates()), Some(1));
    }

    #[test]
    fn test_paraphrase_has_no_match() {
        let selection = SelectionResult {
            text: "I'd go with the humorous one, lightly edited.".into(),
        };
        assert_eq!(selection.matching_candidate(&candidates()), None);
    }
}
