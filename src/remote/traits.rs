//! Capability traits for the session's external collaborators.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{DecisionMap, Profile};

use super::error::{LoadError, SubmitError};

/// Acknowledgement returned by a decision sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    /// Number of decisions the sink recorded, when it says so.
    #[serde(default)]
    pub recorded: Option<usize>,
    /// Sink-assigned receipt, when it returns one.
    #[serde(default)]
    pub receipt: Option<String>,
}

/// Where candidate profiles come from.
///
/// Implementations return the whole sequence for one session. The session
/// never mutates what it receives.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the candidate sequence.
    async fn fetch_candidates(&self) -> Result<Vec<Profile>, LoadError>;
}

/// Where finished decisions go.
#[async_trait]
pub trait DecisionSink: Send + Sync {
    /// Name of this sink for logging.
    fn name(&self) -> &'static str;

    /// Send the full decision mapping.
    ///
    /// Called once per completed deck, and again only when the caller
    /// retries after a failure.
    async fn submit_decisions(&self, decisions: &DecisionMap) -> Result<SubmitAck, SubmitError>;
}
