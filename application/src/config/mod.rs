//! Application-level configuration.
//!
//! - [`GameParams`] — hub queue size, join code length, search limit

pub mod game_params;

pub use game_params::GameParams;
