//! Game domain
//!
//! Round-based elimination voting over a restaurant queue.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SessionRegistry   join code ─► GameSession               │
//! │                                  ├─ GameStatus            │
//! │                                  ├─ CandidateQueue        │
//! │                                  └─ VoteTally             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! ```text
//!   Lobby ──start──► Playing ──winner policy──► Ended
//!     ▲ join            ▲ vote
//! ```

pub mod join_code;
pub mod registry;
pub mod session;
pub mod status;
pub mod tally;
pub mod winner;

pub use join_code::JoinCode;
pub use registry::SessionRegistry;
pub use session::{GameSession, LeaveOutcome, RoundOutcome};
pub use status::GameStatus;
pub use tally::VoteTally;
pub use winner::{NO_CONSENSUS_NAME, Winner};
