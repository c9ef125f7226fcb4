//! Base trait for reducer-owned state.

/// Marker trait for model objects.
///
/// Models are cloned into snapshots for callers and compared in tests,
/// so they must be `Clone + PartialEq`. `Default` is the state before
/// anything has happened.
pub trait Model: Clone + PartialEq + Default + Send + 'static {}
