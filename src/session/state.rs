//! Session state: the loaded deck and the phase it is in.

use std::fmt;
use std::sync::Arc;

use crate::model::{Decision, DecisionMap, Direction, Profile, ProfileId};
use crate::mvi::Model;

/// Identifies one load of a session. Results tagged with an older
/// generation are discarded.
pub type Generation = u64;

/// Loaded profiles plus the reviewer's progress through them.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    generation: Generation,
    profiles: Arc<[Profile]>,
    cursor: usize,
    decisions: DecisionMap,
}

impl Deck {
    pub fn new(generation: Generation, profiles: Arc<[Profile]>) -> Self {
        Self {
            generation,
            profiles,
            cursor: 0,
            decisions: DecisionMap::new(),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn decisions(&self) -> &DecisionMap {
        &self.decisions
    }

    /// Profile under the cursor, if any.
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.cursor)
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor)
    }

    /// Sequential exhaustion: the cursor has moved past the last profile.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.profiles.len()
    }

    /// Set-based exhaustion: every loaded identity has a decision.
    pub fn all_decided(&self) -> bool {
        self.profiles
            .iter()
            .all(|profile| self.decisions.contains(&profile.id))
    }

    /// Records a decision for the current profile and advances by one.
    ///
    /// Returns the decided identity, or `None` when the cursor is past the end.
    pub(crate) fn decide(&mut self, direction: Direction) -> Option<(ProfileId, Decision)> {
        let id = self.current()?.id.clone();
        let decision = Decision::from(direction);
        self.decisions.record(id.clone(), decision);
        self.cursor += 1;
        Some((id, decision))
    }
}

/// Coarse phase of a session, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Idle,
    Loading,
    LoadFailed,
    Ready,
    Complete,
    Submitting,
    Submitted,
    SubmitFailed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Loading => "loading",
            SessionPhase::LoadFailed => "load-failed",
            SessionPhase::Ready => "ready",
            SessionPhase::Complete => "complete",
            SessionPhase::Submitting => "submitting",
            SessionPhase::Submitted => "submitted",
            SessionPhase::SubmitFailed => "submit-failed",
        };
        f.write_str(name)
    }
}

/// State of a swipe session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing loaded yet.
    #[default]
    Idle,

    /// Waiting for the profile source.
    Loading { generation: Generation },

    /// The profile source failed. Reset to try again.
    LoadFailed {
        generation: Generation,
        message: String,
    },

    /// Reviewing; the cursor points at a profile.
    Ready(Deck),

    /// Every profile has been decided.
    Complete(Deck),

    /// Decisions are on their way to the sink.
    Submitting(Deck),

    /// The sink acknowledged the decisions.
    Submitted(Deck),

    /// The sink failed; decisions are still held and can be resent.
    SubmitFailed { deck: Deck, message: String },
}

impl Model for SessionState {}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Idle => SessionPhase::Idle,
            Self::Loading { .. } => SessionPhase::Loading,
            Self::LoadFailed { .. } => SessionPhase::LoadFailed,
            Self::Ready(_) => SessionPhase::Ready,
            Self::Complete(_) => SessionPhase::Complete,
            Self::Submitting(_) => SessionPhase::Submitting,
            Self::Submitted(_) => SessionPhase::Submitted,
            Self::SubmitFailed { .. } => SessionPhase::SubmitFailed,
        }
    }

    /// Generation of the load this state belongs to, if any load started.
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Self::Idle => None,
            Self::Loading { generation } | Self::LoadFailed { generation, .. } => {
                Some(*generation)
            }
            _ => self.deck().map(Deck::generation),
        }
    }

    pub fn deck(&self) -> Option<&Deck> {
        match self {
            Self::Ready(deck)
            | Self::Complete(deck)
            | Self::Submitting(deck)
            | Self::Submitted(deck)
            | Self::SubmitFailed { deck, .. } => Some(deck),
            _ => None,
        }
    }

    /// Loaded profiles; empty until a load succeeds.
    pub fn profiles(&self) -> &[Profile] {
        self.deck().map(Deck::profiles).unwrap_or(&[])
    }

    pub fn cursor(&self) -> usize {
        self.deck().map(Deck::cursor).unwrap_or(0)
    }

    pub fn current(&self) -> Option<&Profile> {
        match self {
            Self::Ready(deck) => deck.current(),
            _ => None,
        }
    }

    /// Completion is `cursor >= len` of a loaded deck.
    pub fn is_complete(&self) -> bool {
        self.deck().is_some_and(Deck::is_complete)
    }

    pub fn all_decided(&self) -> bool {
        self.deck().is_some_and(Deck::all_decided)
    }

    /// Whether `submit` is allowed from here.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::SubmitFailed { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// User-visible failure message, if the last load or submit failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::LoadFailed { message, .. } | Self::SubmitFailed { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }
}
