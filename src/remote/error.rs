//! Errors raised by profile sources and decision sinks.

use thiserror::Error;

use crate::model::ProfileId;

/// Loading candidates failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Could not reach the profile source
    #[error("Failed to reach profile source at '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Source answered with a non-success status
    #[error("Profile source returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body is not a profile list
    #[error("Malformed profile list: {0}")]
    Malformed(String),

    /// The same identity appears twice in one load
    #[error("Profile '{id}' appears more than once")]
    DuplicateProfile { id: ProfileId },

    /// Source refused without a transport error (used by in-memory sources)
    #[error("Profile source unavailable: {0}")]
    Unavailable(String),
}

/// Sending decisions failed or was not allowed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Could not reach the decision sink
    #[error("Failed to reach decision sink at '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Sink answered with a non-success status
    #[error("Decision sink returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Sink refused without a transport error
    #[error("Decisions rejected: {0}")]
    Rejected(String),

    /// Profiles are still waiting for a decision
    #[error("Cannot submit yet: {remaining} profile(s) still undecided")]
    Incomplete { remaining: usize },

    /// Decisions for this deck were already accepted
    #[error("Decisions for this session were already submitted")]
    AlreadySubmitted,

    /// No deck has been loaded
    #[error("Nothing to submit: no profiles loaded")]
    NotLoaded,

    /// A submission for this deck is already in flight
    #[error("A submission is already in progress")]
    InProgress,
}

impl LoadError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Connection { .. } => "connection",
            LoadError::Status { .. } => "status",
            LoadError::Malformed(_) => "malformed",
            LoadError::DuplicateProfile { .. } => "duplicate_profile",
            LoadError::Unavailable(_) => "unavailable",
        }
    }
}

impl SubmitError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Connection { .. } => "connection",
            SubmitError::Status { .. } => "status",
            SubmitError::Rejected(_) => "rejected",
            SubmitError::Incomplete { .. } => "incomplete",
            SubmitError::AlreadySubmitted => "already_submitted",
            SubmitError::NotLoaded => "not_loaded",
            SubmitError::InProgress => "in_progress",
        }
    }

    /// Whether the sink was actually contacted and failed.
    ///
    /// Precondition errors (`Incomplete`, `AlreadySubmitted`, `NotLoaded`,
    /// `InProgress`) leave the session untouched.
    pub fn is_sink_failure(&self) -> bool {
        matches!(
            self,
            SubmitError::Connection { .. } | SubmitError::Status { .. } | SubmitError::Rejected(_)
        )
    }
}
