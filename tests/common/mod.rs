//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use swipedeck::model::Profile;
use swipedeck::remote::{LoadError, ProfileSource};
use tempfile::TempDir;
use tokio::sync::Notify;

/// Profiles with the given ids, named after them.
pub fn profiles(ids: &[&str]) -> Vec<Profile> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            Profile::new(*id, format!("Candidate {}", id), 21 + i as u32)
                .with_bio(format!("Bio of {}", id))
        })
        .collect()
}

/// Write `content` to a temporary config.toml.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Source whose first fetch blocks until released and returns `stale`;
/// every later fetch returns `fresh` straight away. Used to race a reset
/// against an in-flight load.
pub struct GatedSource {
    stale: Vec<Profile>,
    fresh: Vec<Profile>,
    first: AtomicBool,
    gate: Arc<Notify>,
    entered: Arc<Notify>,
}

impl GatedSource {
    pub fn new(stale: Vec<Profile>, fresh: Vec<Profile>) -> Self {
        Self {
            stale,
            fresh,
            first: AtomicBool::new(true),
            gate: Arc::new(Notify::new()),
            entered: Arc::new(Notify::new()),
        }
    }

    /// Releases the blocked first fetch.
    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone()
    }

    /// Notified once the first fetch is waiting.
    pub fn entered(&self) -> Arc<Notify> {
        self.entered.clone()
    }
}

#[async_trait::async_trait]
impl ProfileSource for GatedSource {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch_candidates(&self) -> Result<Vec<Profile>, LoadError> {
        if self.first.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.gate.notified().await;
            return Ok(self.stale.clone());
        }
        Ok(self.fresh.clone())
    }
}
