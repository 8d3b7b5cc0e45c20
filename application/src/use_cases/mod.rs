//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_game;
pub mod dispatch;
pub mod game_hub;
