//! Restaurant domain
//!
//! - [`candidate::Candidate`] — a restaurant in a game's working set
//! - [`detail::RestaurantDetail`] — full detail shown to players each round
//! - [`queue::CandidateQueue`] — ordered working set with rotation semantics

pub mod candidate;
pub mod detail;
pub mod queue;

pub use candidate::{Candidate, CandidateId};
pub use detail::{RestaurantDetail, Review};
pub use queue::CandidateQueue;
