//! Inbound client actions

use munch_domain::GameStatus;
use serde::{Deserialize, Serialize};

/// A message a player's client sends over its connection
///
/// ```
/// use munch_application::ClientAction;
///
/// let action: ClientAction = serde_json::from_str(r#"{"action":"submitVote","ok":true}"#).unwrap();
/// assert_eq!(action, ClientAction::SubmitVote { ok: true });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ClientAction {
    JoinGame,
    StartGame,
    SubmitVote { ok: bool },
}

/// Which lifecycle stage an action may run in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredStatus {
    Exactly(GameStatus),
    /// Skip the status check
    Any,
}

impl RequiredStatus {
    pub fn allows(&self, status: GameStatus) -> bool {
        match self {
            RequiredStatus::Exactly(required) => *required == status,
            RequiredStatus::Any => true,
        }
    }
}

/// Every session-scoped action the engine accepts
///
/// `Disconnect` never comes from a client message; the transport issues
/// it when a connection closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Join,
    Start,
    Vote(bool),
    Disconnect,
}

impl GameAction {
    pub fn required_status(&self) -> RequiredStatus {
        match self {
            GameAction::Join | GameAction::Start => RequiredStatus::Exactly(GameStatus::Lobby),
            GameAction::Vote(_) => RequiredStatus::Exactly(GameStatus::Playing),
            GameAction::Disconnect => RequiredStatus::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Join => "join",
            GameAction::Start => "start",
            GameAction::Vote(_) => "vote",
            GameAction::Disconnect => "disconnect",
        }
    }
}

impl From<ClientAction> for GameAction {
    fn from(action: ClientAction) -> Self {
        match action {
            ClientAction::JoinGame => GameAction::Join,
            ClientAction::StartGame => GameAction::Start,
            ClientAction::SubmitVote { ok } => GameAction::Vote(ok),
        }
    }
}
