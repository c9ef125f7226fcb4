//! Async driver that runs I/O for a swipe session and feeds the results
//! back through the reducer.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::SessionConfig;
use crate::model::{Decision, DecisionMap, Direction, Profile, ProfileId};
use crate::mvi::Reducer;
use crate::remote::{DecisionSink, LoadError, ProfileSource, SubmitAck, SubmitError};

use super::intent::SessionIntent;
use super::reducer::SessionReducer;
use super::state::{Generation, SessionPhase, SessionState};

/// A decision that was actually recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decided {
    pub id: ProfileId,
    pub decision: Decision,
    /// The deck is exhausted after this decision.
    pub completed: bool,
}

/// Result of [`SwipeSession::swipe`].
#[derive(Debug)]
pub struct DecideOutcome {
    /// `None` when there was no current profile (the call was a no-op).
    pub decided: Option<Decided>,
    /// Present when the decision completed the deck and auto-submit ran.
    pub submission: Option<Result<SubmitAck, SubmitError>>,
}

/// One reviewer's pass over a candidate sequence.
///
/// All state sits behind a single lock and only changes through
/// [`SessionReducer`]. The lock is never held across an await: I/O runs
/// unlocked and its result is applied as an intent tagged with the
/// generation it started under, so results that resolve after a
/// [`reset`](Self::reset) are dropped.
pub struct SwipeSession {
    source: Arc<dyn ProfileSource>,
    sink: Arc<dyn DecisionSink>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    generations: AtomicU64,
}

impl SwipeSession {
    pub fn new(source: Arc<dyn ProfileSource>, sink: Arc<dyn DecisionSink>) -> Self {
        Self::with_config(source, sink, SessionConfig::default())
    }

    pub fn with_config(
        source: Arc<dyn ProfileSource>,
        sink: Arc<dyn DecisionSink>,
        config: SessionConfig,
    ) -> Self {
        Self {
            source,
            sink,
            config,
            state: Mutex::new(SessionState::Idle),
            generations: AtomicU64::new(0),
        }
    }

    /// Load the candidate sequence. On failure the session is left in
    /// `LoadFailed` with the error's message; nothing is retried.
    pub async fn initiate(&self) -> Result<(), LoadError> {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(SessionIntent::Load { generation });
        tracing::info!(
            source = self.source.name(),
            generation,
            "Loading candidates"
        );

        let result = self
            .source
            .fetch_candidates()
            .await
            .and_then(|profiles| check_unique(&profiles).map(|_| profiles));

        match result {
            Ok(profiles) => {
                let count = profiles.len();
                let applied = self.apply_for(
                    generation,
                    SessionIntent::Loaded {
                        generation,
                        profiles: profiles.into(),
                    },
                );
                if applied {
                    tracing::info!(generation, count, "Candidates loaded");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(generation, kind = err.kind(), "Failed to load candidates: {}", err);
                self.apply_for(
                    generation,
                    SessionIntent::LoadFailed {
                        generation,
                        message: err.to_string(),
                    },
                );
                Err(err)
            }
        }
    }

    /// Drop all progress and load a fresh sequence.
    ///
    /// Anything still in flight from the previous load or submit is
    /// ignored when it resolves.
    pub async fn reset(&self) -> Result<(), LoadError> {
        tracing::info!(phase = %self.phase(), "Resetting session");
        self.initiate().await
    }

    /// Record a decision for the current profile and advance the cursor.
    ///
    /// No-op (returns `None`) unless a profile is under the cursor.
    pub fn decide(&self, direction: Direction) -> Option<Decided> {
        let mut guard = self.state.lock();

        let Some(id) = guard.current().map(|profile| profile.id.clone()) else {
            tracing::debug!(phase = %guard.phase(), ?direction, "Ignoring decision: no current profile");
            return None;
        };

        let next = SessionReducer::reduce(
            std::mem::take(&mut *guard),
            SessionIntent::Decide { direction },
        );
        let completed = next.is_complete();
        let cursor = next.cursor();
        *guard = next;
        drop(guard);

        let decision = Decision::from(direction);
        tracing::debug!(%id, %decision, cursor, completed, "Decision recorded");

        Some(Decided {
            id,
            decision,
            completed,
        })
    }

    /// [`decide`](Self::decide), then submit if this completed the deck and
    /// auto-submit is enabled.
    pub async fn swipe(&self, direction: Direction) -> DecideOutcome {
        let decided = self.decide(direction);

        let submission = match &decided {
            Some(d) if d.completed && self.config.auto_submit => Some(self.submit().await),
            _ => None,
        };

        DecideOutcome {
            decided,
            submission,
        }
    }

    /// Send the full decision mapping to the sink.
    ///
    /// Allowed once the deck is complete, and again after a failed attempt.
    /// Sink failures leave the session in `SubmitFailed` with the decisions
    /// intact.
    pub async fn submit(&self) -> Result<SubmitAck, SubmitError> {
        let (generation, decisions) = {
            let mut guard = self.state.lock();
            match &*guard {
                SessionState::Complete(_) | SessionState::SubmitFailed { .. } => {}
                SessionState::Ready(deck) => {
                    return Err(SubmitError::Incomplete {
                        remaining: deck.remaining(),
                    })
                }
                SessionState::Submitting(_) => return Err(SubmitError::InProgress),
                SessionState::Submitted(_) => return Err(SubmitError::AlreadySubmitted),
                SessionState::Idle
                | SessionState::Loading { .. }
                | SessionState::LoadFailed { .. } => return Err(SubmitError::NotLoaded),
            }

            let next = SessionReducer::reduce(std::mem::take(&mut *guard), SessionIntent::Submit);
            *guard = next;

            match guard.deck() {
                Some(deck) => (deck.generation(), deck.decisions().clone()),
                None => return Err(SubmitError::NotLoaded),
            }
        };

        tracing::info!(
            sink = self.sink.name(),
            generation,
            count = decisions.len(),
            accepted = decisions.accepted(),
            "Submitting decisions"
        );

        match self.sink.submit_decisions(&decisions).await {
            Ok(ack) => {
                if self.apply_for(generation, SessionIntent::Submitted { generation }) {
                    tracing::info!(generation, receipt = ?ack.receipt, "Decisions submitted");
                }
                Ok(ack)
            }
            Err(err) => {
                tracing::warn!(generation, kind = err.kind(), "Failed to submit decisions: {}", err);
                self.apply_for(
                    generation,
                    SessionIntent::SubmitFailed {
                        generation,
                        message: err.to_string(),
                    },
                );
                Err(err)
            }
        }
    }

    /// Clone of the whole state.
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.lock().phase()
    }

    pub fn cursor(&self) -> usize {
        self.state.lock().cursor()
    }

    /// `(cursor, total)`.
    pub fn progress(&self) -> (usize, usize) {
        let guard = self.state.lock();
        (guard.cursor(), guard.profiles().len())
    }

    pub fn remaining(&self) -> usize {
        let guard = self.state.lock();
        guard.profiles().len().saturating_sub(guard.cursor())
    }

    pub fn current(&self) -> Option<Profile> {
        self.state.lock().current().cloned()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.state.lock().profiles().to_vec()
    }

    pub fn decisions(&self) -> DecisionMap {
        self.state
            .lock()
            .deck()
            .map(|deck| deck.decisions().clone())
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.state.lock().is_complete()
    }

    pub fn all_decided(&self) -> bool {
        self.state.lock().all_decided()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.lock().error_message().map(str::to_string)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn apply(&self, intent: SessionIntent) {
        let mut guard = self.state.lock();
        *guard = SessionReducer::reduce(std::mem::take(&mut *guard), intent);
    }

    /// Apply an I/O result. Returns false when the session has moved on
    /// to another generation and the result was discarded.
    fn apply_for(&self, generation: Generation, intent: SessionIntent) -> bool {
        let mut guard = self.state.lock();
        if guard.generation() != Some(generation) {
            tracing::debug!(
                generation,
                current = ?guard.generation(),
                "Discarding stale result"
            );
            return false;
        }
        *guard = SessionReducer::reduce(std::mem::take(&mut *guard), intent);
        true
    }
}

fn check_unique(profiles: &[Profile]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if !seen.insert(&profile.id) {
            return Err(LoadError::DuplicateProfile {
                id: profile.id.clone(),
            });
        }
    }
    Ok(())
}
