use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/swipedeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("swipedeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `remote.base_url` is an http(s) URL
    /// - both remote paths start with `/`
    /// - timeouts are non-zero
    /// - `server.bind_addr` parses as a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        let remote = &self.remote;

        if !(remote.base_url.starts_with("http://") || remote.base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "remote.base_url '{}' must start with http:// or https://",
                remote.base_url
            )));
        }

        for (field, path) in [
            ("candidates_path", &remote.candidates_path),
            ("decisions_path", &remote.decisions_path),
        ] {
            if !path.starts_with('/') {
                return Err(invalid(format!("remote.{} '{}' must start with '/'", field, path)));
            }
        }

        if remote.timeout_seconds == 0 || remote.connect_timeout_seconds == 0 {
            return Err(invalid("remote timeouts must be greater than zero".to_string()));
        }

        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(invalid(format!(
                "server.bind_addr '{}' is not a valid socket address",
                self.server.bind_addr
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
