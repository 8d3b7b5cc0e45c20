//! Application layer for munch
//!
//! This crate contains use cases, port definitions, the real-time protocol,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod protocol;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameParams;
pub use ports::restaurant_provider::{ProviderError, RestaurantProvider, SearchQuery};
pub use protocol::{ClientAction, Delivery, GameAction, RequiredStatus, ServerEvent};
pub use use_cases::create_game::{CreateGameError, CreateGameInput, CreateGameUseCase};
pub use use_cases::dispatch::{Admission, ConnectionId, GameDispatcher};
pub use use_cases::game_hub::{GameHandle, GameHub, HubCommand, HubError};
