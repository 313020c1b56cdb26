//! Round controller trait and the types shared by every mode.
//!
//! A round is one team's turn in one mode. Each mode implements
//! [`RoundController`]; the game holds the live round as an
//! [`ActiveRound`](super::ActiveRound) and drives it with guesses and clock
//! ticks.
//!
//! ## Implementation Notes
//!
//! - `submit_guess`: rejected guesses must leave the round untouched
//! - `on_timer`: only called while the round is unfinished
//! - Finishing a round must cancel its countdown and interval in the same call

use serde::{Deserialize, Serialize};

use super::feedback::FeedbackRow;
use crate::core::{GameConfig, GameError, GamePhase, GameResult, Mode, RngStreams, TeamId};
use crate::scoring::ScoreLedger;
use crate::timer::{TimerEvent, TimerService};
use crate::words::{UsedWords, WordPool};

/// Mutable game state a round works against.
///
/// The game lends these to the active round for the duration of one event.
pub struct RoundContext<'a> {
    pub config: &'a GameConfig,
    pub pool: &'a WordPool,
    pub used: &'a mut UsedWords,
    pub ledger: &'a mut ScoreLedger,
    pub rng: &'a mut RngStreams,
    /// Team whose turn it is; receives points and penalties.
    pub team: TeamId,
}

impl RoundContext<'_> {
    /// Apply a score change to the current team.
    pub fn award(&mut self, delta: i64) -> i64 {
        self.ledger.award(self.team, delta)
    }
}

/// Why a turn was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    OutOfGuesses,
    TimedOut,
}

/// How a team's turn ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Answer found (Normal, Riddle).
    Won { answer: String, points: i64 },
    /// Answer not found (Normal, Riddle).
    Lost { answer: String, reason: LossReason },
    /// All words of a Timed turn played.
    Completed {
        solved: Vec<String>,
        failed: Vec<String>,
        net_points: i64,
    },
}

impl TurnOutcome {
    /// Whether the turn counts as a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            TurnOutcome::Won { .. } => true,
            TurnOutcome::Lost { .. } => false,
            TurnOutcome::Completed { solved, failed, .. } => solved.len() >= failed.len(),
        }
    }
}

/// Result of an accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    /// Whether the guess matched.
    pub correct: bool,
    /// Score change this guess caused for the current team.
    pub score_delta: i64,
    /// Whether the turn ended with this guess.
    pub turn_over: bool,
}

/// Render state of the live round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundView {
    Normal {
        rows: Vec<FeedbackRow>,
        guesses_used: usize,
        max_guesses: usize,
        word_length: usize,
        /// Filled in once the turn is over.
        answer: Option<String>,
    },
    Riddle {
        riddle: String,
        /// Answer with hidden letters as `_`; spaces always shown.
        masked: String,
        letters_revealed: usize,
        guesses: u32,
        remaining_secs: Option<u32>,
        answer: Option<String>,
    },
    Timed {
        /// 1-based number of the current word.
        word_number: usize,
        words_total: usize,
        guesses_used: usize,
        max_guesses: usize,
        hints: Vec<String>,
        remaining_secs: Option<u32>,
        solved: usize,
        failed: usize,
        /// Answer of the previous word, shown after it is resolved.
        previous_answer: Option<String>,
    },
}

/// A mode's round lifecycle.
pub trait RoundController {
    /// Mode this round belongs to.
    fn mode(&self) -> Mode;

    /// How the turn ended, or `None` while it is still being played.
    fn outcome(&self) -> Option<&TurnOutcome>;

    /// Process a guess from the current team.
    fn submit_guess(&mut self, guess: &str, ctx: &mut RoundContext<'_>) -> GameResult<GuessReport>;

    /// React to a countdown expiry or interval firing.
    fn on_timer(&mut self, event: TimerEvent, ctx: &mut RoundContext<'_>);

    /// The round's timers, if the mode uses any.
    fn timers(&self) -> Option<&TimerService>;

    /// Mutable access to the round's timers.
    fn timers_mut(&mut self) -> Option<&mut TimerService>;

    /// Current render state.
    fn view(&self) -> RoundView;

    // === Convenience Methods ===

    /// Whether the turn has ended.
    fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Advance the round's clock by one second.
    ///
    /// Events after the one that finishes the round are dropped.
    fn tick(&mut self, ctx: &mut RoundContext<'_>) {
        if self.is_finished() {
            return;
        }
        let Some(timers) = self.timers_mut() else {
            return;
        };
        for event in timers.tick() {
            if self.is_finished() {
                break;
            }
            self.on_timer(event, ctx);
        }
    }

    /// Seconds left on the countdown.
    fn remaining_secs(&self) -> Option<u32> {
        self.timers().and_then(TimerService::remaining_secs)
    }

    /// Freeze the round's clock.
    fn pause(&mut self) {
        if let Some(timers) = self.timers_mut() {
            timers.pause();
        }
    }

    /// Unfreeze the round's clock.
    fn resume(&mut self) {
        if let Some(timers) = self.timers_mut() {
            timers.resume();
        }
    }

    /// Whether the clock is frozen.
    fn is_paused(&self) -> bool {
        self.timers().is_some_and(TimerService::is_paused)
    }

    /// Whether any countdown or interval is still scheduled.
    fn has_pending_timers(&self) -> bool {
        self.timers().is_some_and(|t| !t.is_idle())
    }
}

/// Error for a guess sent to a round that already ended.
pub(crate) fn round_over() -> GameError {
    GameError::UnexpectedEvent {
        event: "guess",
        phase: GamePhase::RoundEnd,
    }
}

/// Check a word guess: exactly `length` ASCII letters after trimming.
///
/// Returns the upper-cased guess.
pub(crate) fn normalize_word_guess(guess: &str, length: usize) -> GameResult<String> {
    let guess = guess.trim();
    let actual = guess.chars().count();
    if actual != length || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GameError::InvalidGuessLength {
            expected: length,
            actual,
        });
    }
    Ok(guess.to_uppercase())
}
