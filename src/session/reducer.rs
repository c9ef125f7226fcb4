//! Reducer for swipe session state transitions.

use crate::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{Deck, SessionState};

/// Pure state transitions for a swipe session.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type Model = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::Model, intent: Self::Intent) -> Self::Model {
        match intent {
            // Initiate and reset are the same transition: anything may reload.
            SessionIntent::Load { generation } => SessionState::Loading { generation },

            SessionIntent::Loaded {
                generation,
                profiles,
            } => match state {
                SessionState::Loading { generation: current } if current == generation => {
                    let deck = Deck::new(generation, profiles);
                    if deck.is_complete() {
                        SessionState::Complete(deck)
                    } else {
                        SessionState::Ready(deck)
                    }
                }
                other => other,
            },

            SessionIntent::LoadFailed {
                generation,
                message,
            } => match state {
                SessionState::Loading { generation: current } if current == generation => {
                    SessionState::LoadFailed {
                        generation,
                        message,
                    }
                }
                other => other,
            },

            SessionIntent::Decide { direction } => match state {
                SessionState::Ready(mut deck) => {
                    deck.decide(direction);
                    if deck.is_complete() {
                        SessionState::Complete(deck)
                    } else {
                        SessionState::Ready(deck)
                    }
                }
                other => other,
            },

            SessionIntent::Submit => match state {
                SessionState::Complete(deck) | SessionState::SubmitFailed { deck, .. } => {
                    SessionState::Submitting(deck)
                }
                other => other,
            },

            SessionIntent::Submitted { generation } => match state {
                SessionState::Submitting(deck) if deck.generation() == generation => {
                    SessionState::Submitted(deck)
                }
                other => other,
            },

            SessionIntent::SubmitFailed {
                generation,
                message,
            } => match state {
                SessionState::Submitting(deck) if deck.generation() == generation => {
                    SessionState::SubmitFailed { deck, message }
                }
                other => other,
            },
        }
    }
}
