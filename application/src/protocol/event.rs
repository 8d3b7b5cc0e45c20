//! Outbound server events

use munch_domain::{RestaurantDetail, Winner};
use serde::{Deserialize, Serialize};

/// Reason sent when a connection names a game that does not exist
pub const INVALID_JOIN_CODE: &str = "Invalid Join Code";

/// An event pushed to the members of a session group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Player count changed
    #[serde(rename_all = "camelCase")]
    JoinedGame { num_players: u32 },
    /// Play began; first restaurant up for a vote
    StartedGame { restaurant: RestaurantDetail },
    /// The previous round closed; next restaurant up for a vote
    NextChoice { restaurant: RestaurantDetail },
    /// The game is over
    EndedGame { winner: Winner },
    /// The connection misbehaved and is about to be closed
    Error { reason: String },
    /// The restaurant provider failed; the action may be retried
    ProviderError { reason: String },
}

impl ServerEvent {
    pub fn error(reason: impl Into<String>) -> Self {
        ServerEvent::Error {
            reason: reason.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::JoinedGame { .. } => "joinedGame",
            ServerEvent::StartedGame { .. } => "startedGame",
            ServerEvent::NextChoice { .. } => "nextChoice",
            ServerEvent::EndedGame { .. } => "endedGame",
            ServerEvent::Error { .. } => "error",
            ServerEvent::ProviderError { .. } => "providerError",
        }
    }
}

/// What the engine hands to a single connection
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Event(ServerEvent),
    /// Close the connection
    Close,
}
