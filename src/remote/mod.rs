//! External collaborators of a swipe session.
//!
//! The session talks to a [`ProfileSource`] and a [`DecisionSink`] and
//! never to a transport directly, so the HTTP clients here can be swapped
//! for the in-memory ones (or a real backend) without touching session logic.

mod error;
mod http;
mod memory;
mod traits;

pub use error::{LoadError, SubmitError};
pub use http::{build_client, http_remote, HttpDecisionSink, HttpProfileSource};
pub use memory::{FailingSource, MemorySink, StaticProfileSource};
pub use traits::{DecisionSink, ProfileSource, SubmitAck};
