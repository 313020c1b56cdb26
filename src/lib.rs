//! # word-party
//!
//! Engine for a host-operated party word game played by teams sharing one
//! screen. Three mini-games run in a fixed order:
//!
//! 1. **Normal**: guess a 5-letter word in 6 attempts with letter feedback
//! 2. **Riddle**: solve a riddle while its answer is revealed over time
//! 3. **Timed**: five words against the clock with escalating hints
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws anything. Hosts send
//!    [`HostEvent`]s and render the returned [`GameView`].
//!
//! 2. **Synchronous**: Every event, including clock ticks, is processed to
//!    completion before the call returns. Timers are virtual and driven by
//!    the host one second at a time.
//!
//! 3. **Configuration Over Constants**: Points, penalties, durations and
//!    round counts live in [`GameConfig`].
//!
//! 4. **Deterministic**: With a fixed seed a whole game replays identically.
//!
//! ## Modules
//!
//! - `core`: Team IDs, modes and phases, RNG, configuration, errors
//! - `words`: Word pool, built-in lists, Used-Words set
//! - `scoring`: Score ledger
//! - `timer`: Countdown and reveal interval
//! - `rounds`: Round controllers for each mode
//! - `game`: Mode sequencer, host events, render views

pub mod core;
pub mod words;
pub mod scoring;
pub mod timer;
pub mod rounds;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GamePhase, GameResult, GameRng, Mode, NormalRules, RiddleRules,
    TeamId, TeamMap, TimedRules,
};

pub use crate::words::{Riddle, UsedWords, WordPool};

pub use crate::scoring::{ScoreLedger, TeamScore};

pub use crate::timer::{TimerEvent, TimerService};

pub use crate::rounds::{
    ActiveRound, GuessReport, LetterFeedback, LossReason, NormalRound, RiddleRound,
    RoundController, RoundView, TimedRound, TurnOutcome,
};

pub use crate::game::{Game, GameBuilder, GameView, HostEvent, ModeIntro, Notice, NoticeKind};
