//! In-memory sources and sinks.
//!
//! These stand in for a backend during tests and demos: a fixed profile
//! list, a source that always fails, and a sink that records what it was
//! given.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::model::{DecisionMap, Profile};

use super::error::{LoadError, SubmitError};
use super::traits::{DecisionSink, ProfileSource, SubmitAck};

/// Serves a fixed profile list.
///
/// Batches can be queued with [`StaticProfileSource::push_batch`]; each
/// fetch pops the next queued batch and falls back to the base list.
#[derive(Clone, Default)]
pub struct StaticProfileSource {
    profiles: Arc<Vec<Profile>>,
    queued: Arc<Mutex<VecDeque<Vec<Profile>>>>,
}

impl StaticProfileSource {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
            queued: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue a one-off list for the next fetch.
    pub fn push_batch(&self, profiles: Vec<Profile>) {
        self.queued.lock().push_back(profiles);
    }
}

#[async_trait]
impl ProfileSource for StaticProfileSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_candidates(&self) -> Result<Vec<Profile>, LoadError> {
        let next = self.queued.lock().pop_front();
        Ok(next.unwrap_or_else(|| self.profiles.as_ref().clone()))
    }
}

/// Always fails with the given message.
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ProfileSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_candidates(&self) -> Result<Vec<Profile>, LoadError> {
        Err(LoadError::Unavailable(self.message.clone()))
    }
}

/// Records every submission. Can be told to reject the next N calls.
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemorySinkInner>>,
}

#[derive(Default)]
struct MemorySinkInner {
    submissions: Vec<DecisionMap>,
    failures_left: usize,
    attempts: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` submissions.
    pub fn fail_next(&self, count: usize) {
        self.inner.lock().failures_left = count;
    }

    /// Accepted submissions, oldest first.
    pub fn submissions(&self) -> Vec<DecisionMap> {
        self.inner.lock().submissions.clone()
    }

    /// Every call, accepted or not.
    pub fn attempts(&self) -> usize {
        self.inner.lock().attempts
    }
}

#[async_trait]
impl DecisionSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn submit_decisions(&self, decisions: &DecisionMap) -> Result<SubmitAck, SubmitError> {
        let mut inner = self.inner.lock();
        inner.attempts += 1;
        if inner.failures_left > 0 {
            inner.failures_left -= 1;
            return Err(SubmitError::Rejected("sink configured to fail".into()));
        }
        inner.submissions.push(decisions.clone());
        Ok(SubmitAck {
            recorded: Some(decisions.len()),
            receipt: Some(format!("memory-{}", inner.submissions.len())),
        })
    }
}
