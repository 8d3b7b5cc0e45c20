//! Game lifecycle status

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a game session
///
/// Transitions only move forward: `Lobby` → `Playing` → `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Waiting for players to join
    #[default]
    Lobby,
    /// Rounds are being voted on
    Playing,
    /// A winner has been announced
    Ended,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Lobby => "lobby",
            GameStatus::Playing => "playing",
            GameStatus::Ended => "ended",
        }
    }

    /// Human-readable reason sent to a client that acted out of turn
    pub fn mismatch_reason(&self) -> &'static str {
        match self {
            GameStatus::Lobby => "This game is still in the lobby",
            GameStatus::Playing => "This game has already started",
            GameStatus::Ended => "This game has ended",
        }
    }

    /// Whether `next` is a legal forward transition from this status
    pub fn can_advance_to(&self, next: GameStatus) -> bool {
        matches!(
            (self, next),
            (GameStatus::Lobby, GameStatus::Playing) | (GameStatus::Playing, GameStatus::Ended)
        )
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
