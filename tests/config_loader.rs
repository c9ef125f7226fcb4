mod common;

use std::path::PathBuf;

use common::temp_config;
use swipedeck::config::{Config, ConfigError, RemoteConfig, ServerConfig, SessionConfig};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.remote.base_url, "http://127.0.0.1:3001");
    assert_eq!(config.remote.candidates_path, "/api/initiate-swipe");
    assert_eq!(config.remote.decisions_path, "/api/submit-decisions");
    assert_eq!(config.remote.timeout_seconds, 10);
    assert_eq!(config.remote.connect_timeout_seconds, 5);

    assert_eq!(config.server.bind_addr, "127.0.0.1:3001");
    assert!(config.server.profiles_file.is_none());

    assert!(config.session.auto_submit);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("swipedeck/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = temp_config(
        r#"
[remote]
base_url = "https://decks.example.com/"
candidates_path = "/v2/candidates"
decisions_path = "/v2/decisions"
timeout_seconds = 20
connect_timeout_seconds = 2

[server]
bind_addr = "0.0.0.0:8080"
profiles_file = "/srv/profiles.json"

[session]
auto_submit = false
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.remote,
        RemoteConfig {
            base_url: "https://decks.example.com/".into(),
            candidates_path: "/v2/candidates".into(),
            decisions_path: "/v2/decisions".into(),
            timeout_seconds: 20,
            connect_timeout_seconds: 2,
        }
    );
    assert_eq!(
        config.remote.candidates_url(),
        "https://decks.example.com/v2/candidates"
    );
    assert_eq!(
        config.server,
        ServerConfig {
            bind_addr: "0.0.0.0:8080".into(),
            profiles_file: Some(PathBuf::from("/srv/profiles.json")),
        }
    );
    assert_eq!(config.session, SessionConfig { auto_submit: false });
}

#[test]
fn test_partial_config_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[remote]
base_url = "http://10.0.0.5:4000"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.remote.base_url, "http://10.0.0.5:4000");
    assert_eq!(config.remote.timeout_seconds, 10);
    assert_eq!(config.server, ServerConfig::default());
    assert!(config.session.auto_submit);
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = temp_config("[remote\nbase_url = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[session]\nauto_submit = \"yes\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let (_dir, path) = temp_config("[remote]\nbase_url = \"ftp://decks\"\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_relative_paths() {
    let mut config = Config::default();
    config.remote.decisions_path = "api/submit".into();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("decisions_path"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.remote.timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_bad_bind_addr() {
    let mut config = Config::default();
    config.server.bind_addr = "localhost".into();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("bind_addr"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
