//! Presentation layer for munch
//!
//! This crate contains the CLI definition and the axum HTTP + WebSocket
//! server that carries the game protocol.

pub mod cli;
pub mod server;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use server::{AppState, ServerError, build_router, serve};
