//! Real-time protocol between players and the engine
//!
//! | Inbound (`action`) | Required status | Effect |
//! |---|---|---|
//! | `joinGame` | lobby | add a player, broadcast `joinedGame` |
//! | `startGame` | lobby | begin play, broadcast `startedGame` |
//! | `submitVote` | playing | record a vote, maybe `nextChoice` / `endedGame` |
//! | *(disconnect)* | any | remove the player, broadcast `joinedGame` |

pub mod action;
pub mod event;

pub use action::{ClientAction, GameAction, RequiredStatus};
pub use event::{Delivery, INVALID_JOIN_CODE, ServerEvent};
