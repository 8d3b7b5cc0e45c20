//! Infrastructure layer for munch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileProviderConfig,
    FileServerConfig,
};
pub use providers::{YelpConfig, YelpRestaurantProvider};
