//! Reducer trait.

use super::intent::Intent;
use super::model::Model;

/// Reducer transforms a model based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Model, Intent) -> Model
pub trait Reducer {
    /// The model type this reducer operates on.
    type Model: Model;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new model.
    fn reduce(model: Self::Model, intent: Self::Intent) -> Self::Model;
}
