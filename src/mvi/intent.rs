//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Reviewer actions (decide, submit, reset)
/// - Completed I/O (candidates loaded, submission acknowledged)
pub trait Intent: Send + 'static {}
