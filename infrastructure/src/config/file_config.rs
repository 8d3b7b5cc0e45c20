//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types
//! where the server is wired together.

use crate::providers::yelp::{DEFAULT_BASE_URL, YelpConfig};
use munch_application::GameParams;
use munch_domain::game::join_code::DEFAULT_JOIN_CODE_LENGTH;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.search_limit must be between 1 and 50")]
    InvalidSearchLimit,

    #[error("game.join_code_length cannot be 0")]
    InvalidJoinCodeLength,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to listen on
    pub bind: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Raw restaurant provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Yelp Fusion API root
    pub base_url: String,
    /// Bearer token; falls back to `YELP_API_KEY` when unset
    pub api_key: Option<String>,
    /// Maximum candidates fetched per game
    pub search_limit: u32,
    /// Timeout in seconds for provider calls
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            search_limit: 10,
            timeout_seconds: 10,
        }
    }
}

impl FileProviderConfig {
    /// Convert to adapter settings, consulting the environment for the key
    pub fn to_yelp_config(&self) -> YelpConfig {
        YelpConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
        .with_env_fallback()
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Characters in a generated join code
    pub join_code_length: usize,
    /// Capacity of the hub's command queue
    pub command_buffer: usize,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            join_code_length: DEFAULT_JOIN_CODE_LENGTH,
            command_buffer: 256,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP / WebSocket listener
    pub server: FileServerConfig,
    /// Restaurant provider settings
    pub provider: FileProviderConfig,
    /// Game settings
    pub game: FileGameConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        // Yelp caps search results at 50
        if !(1..=50).contains(&self.provider.search_limit) {
            return Err(ConfigValidationError::InvalidSearchLimit);
        }

        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.game.join_code_length == 0 {
            return Err(ConfigValidationError::InvalidJoinCodeLength);
        }

        Ok(())
    }

    /// Application-level game parameters
    pub fn game_params(&self) -> GameParams {
        GameParams::default()
            .with_join_code_length(self.game.join_code_length)
            .with_search_limit(self.provider.search_limit)
            .with_command_buffer(self.game.command_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "127.0.0.1"
port = 8080

[provider]
base_url = "http://localhost:9000/v3"
api_key = "secret"
search_limit = 20
timeout_seconds = 5

[game]
join_code_length = 4
command_buffer = 64
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.socket_addr(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.provider.api_key.as_deref(), Some("secret"));
        assert_eq!(config.provider.search_limit, 20);
        assert_eq!(config.game.join_code_length, 4);
        assert!(config.validate().is_ok());

        let params = config.game_params();
        assert_eq!(params.join_code_length, 4);
        assert_eq!(params.search_limit, 20);
        assert_eq!(params.command_buffer, 64);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 4000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.search_limit, 10);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.game.join_code_length, DEFAULT_JOIN_CODE_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.provider.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_search_limit() {
        let mut config = FileConfig::default();
        config.provider.search_limit = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidSearchLimit)
        );
        config.provider.search_limit = 51;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidSearchLimit)
        );
    }

    #[test]
    fn test_validate_join_code_length() {
        let mut config = FileConfig::default();
        config.game.join_code_length = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidJoinCodeLength)
        );
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.provider.base_url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_provider_config_conversion() {
        let provider = FileProviderConfig {
            api_key: Some("k".to_string()),
            timeout_seconds: 3,
            ..FileProviderConfig::default()
        };
        let yelp = provider.to_yelp_config();
        assert_eq!(yelp.api_key.as_deref(), Some("k"));
        assert_eq!(yelp.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_provider_config_reads_key_from_environment() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("YELP_API_KEY", "env-key");

            let yelp = FileProviderConfig::default().to_yelp_config();
            assert_eq!(yelp.api_key.as_deref(), Some("env-key"));

            let explicit = FileProviderConfig {
                api_key: Some("file-key".to_string()),
                ..FileProviderConfig::default()
            };
            assert_eq!(explicit.to_yelp_config().api_key.as_deref(), Some("file-key"));
            Ok(())
        });
    }
}
