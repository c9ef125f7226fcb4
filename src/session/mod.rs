//! Swipe session: a strictly sequential, single-pass review of a fixed
//! list of candidates.
//!
//! # Architecture
//!
//! - `state.rs` - the loaded deck and the session's phase
//! - `intent.rs` - reviewer actions and I/O results
//! - `reducer.rs` - pure state transitions
//! - `driver.rs` - async [`SwipeSession`] that performs the I/O
//!
//! ```text
//! Idle ─→ Loading ─→ Ready ─→ Complete ─→ Submitting ─→ Submitted
//!            │         ↺ decide               │
//!            └→ LoadFailed                    └→ SubmitFailed ─→ Submitting
//!
//! any state ── reset ──→ Loading
//! ```

mod driver;
mod intent;
mod reducer;
mod state;

pub use driver::{DecideOutcome, Decided, SwipeSession};
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{Deck, Generation, SessionPhase, SessionState};
