//! Normal mode: guess the 5-letter word in 6 attempts.
//!
//! `Setup -> AwaitingGuess -> RoundEnd`. A match awards the win points; the
//! sixth miss ends the turn with nothing. No timers are involved.

use tracing::{debug, info};

use super::controller::{
    normalize_word_guess, round_over, GuessReport, LossReason, RoundContext, RoundController,
    RoundView, TurnOutcome,
};
use super::feedback::{is_solved, score_guess, FeedbackRow};
use crate::core::{GameResult, Mode};
use crate::timer::{TimerEvent, TimerService};

/// One team's Normal-mode turn.
#[derive(Clone, Debug)]
pub struct NormalRound {
    target: String,
    rows: Vec<FeedbackRow>,
    max_guesses: usize,
    word_length: usize,
    outcome: Option<TurnOutcome>,
}

impl NormalRound {
    /// Draw a fresh unused word and start the turn.
    pub fn setup(ctx: &mut RoundContext<'_>) -> GameResult<Self> {
        let rules = &ctx.config.normal;
        let target = ctx
            .pool
            .draw_word(Mode::Normal, rules.word_length, ctx.used, &mut ctx.rng.words)?;
        debug!(team = %ctx.team, "normal round set up");

        Ok(Self::with_target(target, rules.max_guesses))
    }

    /// Start a turn against a known word.
    #[must_use]
    pub fn with_target(target: impl Into<String>, max_guesses: usize) -> Self {
        let target = target.into().to_uppercase();
        Self {
            word_length: target.chars().count(),
            target,
            rows: Vec::new(),
            max_guesses,
            outcome: None,
        }
    }

    /// Guesses made so far.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.len()
    }

    /// Feedback grid so far.
    #[must_use]
    pub fn rows(&self) -> &[FeedbackRow] {
        &self.rows
    }

    /// The word being guessed.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl RoundController for NormalRound {
    fn mode(&self) -> Mode {
        Mode::Normal
    }

    fn outcome(&self) -> Option<&TurnOutcome> {
        self.outcome.as_ref()
    }

    fn submit_guess(&mut self, guess: &str, ctx: &mut RoundContext<'_>) -> GameResult<GuessReport> {
        if self.outcome.is_some() {
            return Err(round_over());
        }
        let guess = normalize_word_guess(guess, self.word_length)?;

        let row = score_guess(&self.target, &guess);
        let correct = is_solved(&row);
        self.rows.push(row);
        debug!(%guess, correct, used = self.rows.len(), "normal guess");

        let mut score_delta = 0;
        if correct {
            score_delta = ctx.config.normal.win_points;
            ctx.award(score_delta);
            info!(team = %ctx.team, word = %self.target, "word guessed");
            self.outcome = Some(TurnOutcome::Won {
                answer: self.target.clone(),
                points: score_delta,
            });
        } else if self.rows.len() >= self.max_guesses {
            info!(team = %ctx.team, word = %self.target, "out of guesses");
            self.outcome = Some(TurnOutcome::Lost {
                answer: self.target.clone(),
                reason: LossReason::OutOfGuesses,
            });
        }

        Ok(GuessReport {
            correct,
            score_delta,
            turn_over: self.outcome.is_some(),
        })
    }

    fn on_timer(&mut self, _event: TimerEvent, _ctx: &mut RoundContext<'_>) {}

    fn timers(&self) -> Option<&TimerService> {
        None
    }

    fn timers_mut(&mut self) -> Option<&mut TimerService> {
        None
    }

    fn view(&self) -> RoundView {
        RoundView::Normal {
            rows: self.rows.clone(),
            guesses_used: self.rows.len(),
            max_guesses: self.max_guesses,
            word_length: self.word_length,
            answer: self.outcome.as_ref().map(|_| self.target.clone()),
        }
    }
}
