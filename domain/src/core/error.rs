//! Domain error types

use crate::game::status::GameStatus;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No restaurants found for this search")]
    NoCandidates,

    #[error("Candidate queue is exhausted")]
    QueueExhausted,

    #[error("Cannot {action} while the game is {status}")]
    InvalidTransition {
        action: &'static str,
        status: GameStatus,
    },

    #[error("No players left in the game")]
    NoPlayers,

    #[error("Every join code is in use")]
    CodeSpaceExhausted,
}

impl DomainError {
    /// Check if this error was caused by acting in the wrong lifecycle stage
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            action: "vote",
            status: GameStatus::Lobby,
        };
        assert_eq!(error.to_string(), "Cannot vote while the game is lobby");
    }

    #[test]
    fn test_is_invalid_transition_check() {
        assert!(
            DomainError::InvalidTransition {
                action: "start",
                status: GameStatus::Ended,
            }
            .is_invalid_transition()
        );
        assert!(!DomainError::NoCandidates.is_invalid_transition());
        assert!(!DomainError::QueueExhausted.is_invalid_transition());
    }
}
