//! Core engine types: teams, modes, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! words or timers.

pub mod team;
pub mod mode;
pub mod rng;
pub mod config;
pub mod error;

pub use team::{TeamId, TeamMap};
pub use mode::{GamePhase, Mode};
pub use rng::{GameRng, RngStreams};
pub use config::{GameConfig, NormalRules, RiddleRules, TimedRules};
pub use error::{GameError, GameResult};
