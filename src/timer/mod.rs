//! Timer service for timed rounds.
//!
//! Each round owns its own [`TimerService`], so a countdown can never fire
//! into a different round's state.

pub mod service;

pub use service::{TimerEvent, TimerEvents, TimerService};
