//! Model-Intent-Reducer primitives.
//!
//! Session state changes flow in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ Model ──→ caller / view
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **Model**: self-contained snapshot of session state
//! - **Intent**: a user action or an I/O result
//! - **Reducer**: pure function that produces the next model

mod intent;
mod model;
mod reducer;

pub use intent::Intent;
pub use model::Model;
pub use reducer::Reducer;
