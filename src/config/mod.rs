//! TOML configuration for the review client and the deck server.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, RemoteConfig, ServerConfig, SessionConfig};
