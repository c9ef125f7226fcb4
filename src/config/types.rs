use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the review client finds the profile source and decision sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Scheme + host + port of the deck server (e.g., "http://127.0.0.1:3001").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path answering with the candidate list.
    #[serde(default = "default_candidates_path")]
    pub candidates_path: String,
    /// Path accepting the decision map.
    #[serde(default = "default_decisions_path")]
    pub decisions_path: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Fixture deck server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// JSON file with the profile list. Built-in profiles when unset.
    #[serde(default)]
    pub profiles_file: Option<PathBuf>,
}

/// Session behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Submit as soon as the last card is decided (default: true).
    #[serde(default = "default_auto_submit")]
    pub auto_submit: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

fn default_candidates_path() -> String {
    "/api/initiate-swipe".to_string()
}

fn default_decisions_path() -> String {
    "/api/submit-decisions".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_bind_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_auto_submit() -> bool {
    true
}

impl RemoteConfig {
    pub fn candidates_url(&self) -> String {
        join_url(&self.base_url, &self.candidates_path)
    }

    pub fn decisions_url(&self) -> String {
        join_url(&self.base_url, &self.decisions_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            candidates_path: default_candidates_path(),
            decisions_path: default_decisions_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            profiles_file: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_submit: default_auto_submit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let remote = RemoteConfig {
            base_url: "http://localhost:9000/".into(),
            ..RemoteConfig::default()
        };
        assert_eq!(remote.candidates_url(), "http://localhost:9000/api/initiate-swipe");
        assert_eq!(remote.decisions_url(), "http://localhost:9000/api/submit-decisions");
    }
}
