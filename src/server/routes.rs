use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;

use crate::model::{DecisionMap, Profile, ProfileId};

use super::error::ServerError;

pub const CANDIDATES_PATH: &str = "/api/initiate-swipe";
pub const DECISIONS_PATH: &str = "/api/submit-decisions";
pub const SUBMISSIONS_PATH: &str = "/api/submissions";
pub const HEALTH_PATH: &str = "/health";

/// A decision map the server accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedSubmission {
    pub receipt: String,
    pub decisions: DecisionMap,
}

/// Shared state behind every handler.
pub struct DeckState {
    profiles: Vec<Profile>,
    known: HashSet<ProfileId>,
    submissions: Mutex<Vec<RecordedSubmission>>,
}

impl DeckState {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, ServerError> {
        let mut known = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !known.insert(profile.id.clone()) {
                return Err(ServerError::DuplicateProfile {
                    id: profile.id.clone(),
                });
            }
        }

        Ok(Self {
            profiles,
            known,
            submissions: Mutex::new(Vec::new()),
        })
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions.lock().clone()
    }

    fn record(&self, decisions: DecisionMap) -> Result<RecordedSubmission, ServerError> {
        let unknown: Vec<ProfileId> = decisions
            .ids()
            .filter(|id| !self.known.contains(*id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ServerError::UnknownProfiles { ids: unknown });
        }

        let submission = RecordedSubmission {
            receipt: uuid::Uuid::new_v4().to_string(),
            decisions,
        };
        self.submissions.lock().push(submission.clone());
        Ok(submission)
    }
}

#[derive(Debug, Serialize)]
struct SubmitResponse {
    status: &'static str,
    recorded: usize,
    receipt: String,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

pub fn build_router(state: Arc<DeckState>) -> Router {
    Router::new()
        .route(CANDIDATES_PATH, post(initiate_swipe))
        .route(DECISIONS_PATH, post(submit_decisions))
        .route(SUBMISSIONS_PATH, get(list_submissions))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

async fn initiate_swipe(State(state): State<Arc<DeckState>>) -> Json<Vec<Profile>> {
    info!(count = state.profiles.len(), "Serving candidates");
    Json(state.profiles.clone())
}

async fn submit_decisions(
    State(state): State<Arc<DeckState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ServerError> {
    let decisions: DecisionMap = serde_json::from_slice(&body)
        .map_err(|e| ServerError::MalformedPayload(e.to_string()))?;

    let submission = state.record(decisions)?;
    info!(
        receipt = %submission.receipt,
        recorded = submission.decisions.len(),
        accepted = submission.decisions.accepted(),
        "Decisions received"
    );

    Ok(Json(SubmitResponse {
        status: "ok",
        recorded: submission.decisions.len(),
        receipt: submission.receipt,
    }))
}

async fn list_submissions(State(state): State<Arc<DeckState>>) -> Json<Vec<RecordedSubmission>> {
    Json(state.submissions())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "swipedeck",
    })
}
