mod common;

use std::sync::Arc;

use common::profiles;
use swipedeck::config::{RemoteConfig, SessionConfig};
use swipedeck::model::{builtin_profiles, Decision, Direction, Profile, ProfileId};
use swipedeck::remote::http_remote;
use swipedeck::server::{load_profiles, DeckServer, ServerError};
use swipedeck::session::{SessionPhase, SwipeSession};
use tokio::sync::oneshot;

struct RunningServer {
    base_url: String,
    state: Arc<swipedeck::server::DeckState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<Result<(), ServerError>>,
}

impl RunningServer {
    async fn start(profiles: Vec<Profile>) -> Self {
        let mut server = DeckServer::new(profiles).expect("valid profiles");
        let addr = server.bind("127.0.0.1:0").await.expect("bind");
        let state = server.state();
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run(async move {
            let _ = rx.await;
        }));

        Self {
            base_url: format!("http://{}", addr),
            state,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn session(&self, auto_submit: bool) -> SwipeSession {
        let remote = RemoteConfig {
            base_url: self.base_url.clone(),
            ..RemoteConfig::default()
        };
        let (source, sink) = http_remote(&remote).expect("client builds");
        SwipeSession::with_config(Arc::new(source), Arc::new(sink), SessionConfig { auto_submit })
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("server task").expect("clean shutdown");
    }
}

#[tokio::test]
async fn session_round_trip_through_server() {
    let server = RunningServer::start(profiles(&["P1", "P2", "P3"])).await;
    let session = server.session(true);

    session.initiate().await.unwrap();
    assert_eq!(session.progress(), (0, 3));

    session.swipe(Direction::Right).await;
    session.swipe(Direction::Left).await;
    let last = session.swipe(Direction::Right).await;

    let ack = last.submission.expect("auto-submit ran").unwrap();
    assert_eq!(ack.recorded, Some(3));
    let receipt = ack.receipt.expect("server assigns a receipt");
    assert!(uuid::Uuid::parse_str(&receipt).is_ok());
    assert_eq!(session.phase(), SessionPhase::Submitted);

    let recorded = server.state.submissions();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].receipt, receipt);
    assert_eq!(
        recorded[0].decisions.get(&ProfileId::from("P2")),
        Some(Decision::Rejected)
    );

    server.stop().await;
}

#[tokio::test]
async fn submissions_endpoint_lists_received_maps() {
    let server = RunningServer::start(profiles(&["a"])).await;
    let session = server.session(false);
    session.initiate().await.unwrap();
    session.decide(Direction::Right);
    session.submit().await.unwrap();

    let body: serde_json::Value = reqwest::get(server.url("/api/submissions"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body[0]["decisions"], serde_json::json!({"a": "accepted"}));
    assert!(body[0]["receipt"].is_string());

    server.stop().await;
}

#[tokio::test]
async fn unknown_identities_are_rejected_with_422() {
    let server = RunningServer::start(profiles(&["a"])).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/submit-decisions"))
        .json(&serde_json::json!({"a": "accepted", "ghost": "rejected"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "unknown_profiles");
    assert!(body["error"]["message"].as_str().unwrap().contains("ghost"));
    assert!(server.state.submissions().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn malformed_payload_is_rejected_with_400() {
    let server = RunningServer::start(profiles(&["a"])).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/submit-decisions"))
        .header("content-type", "application/json")
        .body(r#"{"a": "maybe"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "malformed_payload");

    server.stop().await;
}

#[tokio::test]
async fn health_reports_service_name() {
    let server = RunningServer::start(builtin_profiles()).await;

    let body: serde_json::Value = reqwest::get(server.url("/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "swipedeck");

    server.stop().await;
}

#[tokio::test]
async fn builtin_profiles_load_through_http() {
    let server = RunningServer::start(builtin_profiles()).await;
    let session = server.session(false);

    session.initiate().await.unwrap();
    assert_eq!(session.profiles(), builtin_profiles());

    server.stop().await;
}

#[tokio::test]
async fn run_without_bind_is_an_error() {
    let server = DeckServer::new(profiles(&["a"])).unwrap();
    let result = server.run(async {}).await;
    assert!(matches!(result, Err(ServerError::Internal(_))));
}

#[test]
fn duplicate_fixture_profiles_are_refused() {
    assert!(matches!(
        DeckServer::new(profiles(&["a", "a"])),
        Err(ServerError::DuplicateProfile { .. })
    ));
}

#[test]
fn profiles_file_is_read_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");
    std::fs::write(&path, r#"[{"id":"x","name":"Xena","age":33,"bio":"warrior"}]"#).unwrap();

    let loaded = load_profiles(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Xena");

    assert!(matches!(
        load_profiles(&dir.path().join("missing.json")),
        Err(ServerError::ProfilesRead { .. })
    ));

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        load_profiles(&path),
        Err(ServerError::ProfilesParse { .. })
    ));
}
