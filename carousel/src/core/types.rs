//! Shared types for the draw core.
//!
//! Participants are identified by display name. Uniqueness of names is the
//! caller's responsibility (see [`crate::core::names::validate_names`]).

use serde::{Deserialize, Serialize};

/// A participant's display name.
pub type Participant = String;

/// One giver → recipient entry of a draw.
///
/// Field names match the persisted/exported record shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    /// The giver.
    pub name: Participant,
    /// The recipient.
    pub gives_to: Participant,
}

impl Pairing {
    pub fn new(name: impl Into<String>, gives_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gives_to: gives_to.into(),
        }
    }

    /// Single-line rendering used for reveal and text output.
    pub fn line(&self) -> String {
        format!("{} → {}", self.name, self.gives_to)
    }
}

/// Complete giver → recipient bijection, one entry per participant in input order.
pub type Assignment = Vec<Pairing>;

/// Render an assignment as `giver → recipient` lines in stored order.
pub fn results_text(results: &[Pairing]) -> String {
    results
        .iter()
        .map(Pairing::line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_text_joins_lines_without_trailing_newline() {
        let results = vec![Pairing::new("Alice", "Bob"), Pairing::new("Bob", "Alice")];
        assert_eq!(results_text(&results), "Alice → Bob\nBob → Alice");
    }

    #[test]
    fn pairing_serializes_with_record_field_names() {
        let json = serde_json::to_string(&Pairing::new("Alice", "Bob")).expect("serialize");
        assert_eq!(json, r#"{"name":"Alice","gives_to":"Bob"}"#);
    }
}
