//! Game parameters — hub and session creation control.
//!
//! [`GameParams`] groups the static parameters used by
//! [`GameHub`](crate::use_cases::game_hub::GameHub) and
//! [`CreateGameUseCase`](crate::use_cases::create_game::CreateGameUseCase).
//! These are application-layer concerns, not domain policy.

use munch_domain::game::join_code::DEFAULT_JOIN_CODE_LENGTH;
use serde::{Deserialize, Serialize};

/// Hub and session creation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    /// Characters in a generated join code.
    pub join_code_length: usize,
    /// Maximum candidates requested from the provider per game.
    pub search_limit: u32,
    /// Capacity of the hub's inbound command queue.
    pub command_buffer: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            join_code_length: DEFAULT_JOIN_CODE_LENGTH,
            search_limit: 10,
            command_buffer: 256,
        }
    }
}

impl GameParams {
    // ==================== Builder Methods ====================

    pub fn with_join_code_length(mut self, length: usize) -> Self {
        self.join_code_length = length;
        self
    }

    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_command_buffer(mut self, capacity: usize) -> Self {
        self.command_buffer = capacity;
        self
    }
}
