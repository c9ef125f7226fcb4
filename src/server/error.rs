//! Error types and response handling for the deck server.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::ProfileId;

/// Errors that can occur while building or running the deck server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request body could not be parsed
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Decisions reference profiles this server never served
    #[error("Unknown profile(s): {}", join_ids(.ids))]
    UnknownProfiles { ids: Vec<ProfileId> },

    /// Configured profile list contains the same identity twice
    #[error("Profile '{id}' is listed more than once")]
    DuplicateProfile { id: ProfileId },

    /// Profiles file could not be read
    #[error("Failed to read profiles file '{path}': {source}")]
    ProfilesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profiles file is not a JSON profile list
    #[error("Failed to parse profiles file '{path}': {source}")]
    ProfilesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Could not bind the listener
    #[error("Failed to bind '{addr}': {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_ids(ids: &[ProfileId]) -> String {
    ids.iter()
        .map(ProfileId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ServerError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ServerError::UnknownProfiles { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::MalformedPayload(_) => "malformed_payload",
            ServerError::UnknownProfiles { .. } => "unknown_profiles",
            ServerError::DuplicateProfile { .. } => "duplicate_profile",
            ServerError::ProfilesRead { .. } | ServerError::ProfilesParse { .. } => {
                "profiles_file"
            }
            ServerError::Bind { .. } => "bind_error",
            ServerError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}
