//! Sequential swipe review of candidate profiles.
//!
//! A [`session::SwipeSession`] loads a fixed candidate list from a
//! [`remote::ProfileSource`], records one accept/reject decision per
//! profile in order, and sends the finished mapping to a
//! [`remote::DecisionSink`]. The [`server`] module provides a fixture deck
//! server for the HTTP implementations of both.

pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod remote;
pub mod server;
pub mod session;
