//! Domain records shared by the session, the remote clients and the deck server.

mod decision;
mod profile;

pub use decision::{Decision, DecisionMap, Direction};
pub use profile::{builtin_profiles, Profile, ProfileId, PLACEHOLDER_IMAGE};
