//! Intents for the swipe session.

use std::sync::Arc;

use crate::model::{Direction, Profile};
use crate::mvi::Intent;

use super::state::Generation;

/// Intents that can be dispatched to a swipe session.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Start (or restart) loading candidates under a fresh generation.
    Load { generation: Generation },

    /// The profile source answered.
    Loaded {
        generation: Generation,
        profiles: Arc<[Profile]>,
    },

    /// The profile source failed.
    LoadFailed {
        generation: Generation,
        message: String,
    },

    /// Reviewer swiped the current card.
    Decide { direction: Direction },

    /// Reviewer asked to send the decisions.
    Submit,

    /// The decision sink acknowledged.
    Submitted { generation: Generation },

    /// The decision sink failed.
    SubmitFailed {
        generation: Generation,
        message: String,
    },
}

impl Intent for SessionIntent {}
