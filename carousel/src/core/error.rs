//! Error taxonomy for the draw core.
//!
//! Every variant is recoverable at the boundary: the caller reports it and may
//! retry with adjusted inputs. No variant ever carries a partial assignment.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The generator exhausted its attempt budget without a complete assignment.
    #[error(
        "Could not find a valid solution after {attempts} attempts.\n\nSuggestions:\n- Try removing some exclusions (currently {exclusions} exclusions for {participants} people)\n- Add more participants to increase possible matches\n- Check for conflicting exclusion rules"
    )]
    UnsatisfiableConstraints {
        attempts: u32,
        participants: usize,
        exclusions: usize,
    },

    /// Import input could not be parsed or lacks the `names` array.
    #[error("Invalid draw file: {message}")]
    InvalidImportFormat { message: String },

    /// Participant list failed validation before a draw.
    #[error("invalid participant list:\n- {}", .problems.join("\n- "))]
    InvalidParticipants { problems: Vec<String> },
}

impl DrawError {
    pub fn invalid_import(message: impl Into<String>) -> Self {
        Self::InvalidImportFormat {
            message: message.into(),
        }
    }

    /// Remediation hints for the caller to show alongside the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsatisfiableConstraints {
                participants,
                exclusions,
                ..
            } => vec![
                format!(
                    "Try removing some exclusions (currently {exclusions} exclusions for {participants} people)"
                ),
                "Add more participants to increase possible matches".to_string(),
                "Check for conflicting exclusion rules".to_string(),
            ],
            Self::InvalidImportFormat { .. } => {
                vec!["Import a JSON file produced by `carousel export`".to_string()]
            }
            Self::InvalidParticipants { .. } => {
                vec!["Enter unique, non-empty names with `carousel names`".to_string()]
            }
        }
    }
}
