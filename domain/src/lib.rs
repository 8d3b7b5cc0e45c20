//! Domain layer for munch
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Game Session
//!
//! A group of players picks a restaurant by voting yes/no on one candidate
//! per round. Candidates nobody liked are dropped, candidates with any
//! support go to the back of the queue, and the game ends on a unanimous
//! round, by attrition, or after extended play.
//!
//! ## Session Registry
//!
//! Live sessions addressed by a short join code.

pub mod core;
pub mod game;
pub mod restaurant;

// Re-export commonly used types
pub use core::error::DomainError;
pub use game::{
    GameSession, GameStatus, JoinCode, LeaveOutcome, NO_CONSENSUS_NAME, RoundOutcome,
    SessionRegistry, VoteTally, Winner,
};
pub use restaurant::{Candidate, CandidateId, CandidateQueue, RestaurantDetail, Review};
