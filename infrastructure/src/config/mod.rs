//! Configuration file loading for munch
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MUNCH_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./munch.toml` or `./.munch.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/munch/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileProviderConfig, FileServerConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
