//! Timed mode: five words per turn, 30 seconds and 3 guesses each.
//!
//! The words are drawn from the same pool as Normal mode and count against
//! the game's Used-Words set. A correct word scores 100 and moves on. Each
//! miss raises the hint level; the third miss, or the countdown running out,
//! costs 50 and moves on. The turn ends after the last word.

use tracing::{debug, info};

use super::controller::{
    normalize_word_guess, round_over, GuessReport, RoundContext, RoundController, RoundView,
    TurnOutcome,
};
use super::hint::{hints_up_to, MAX_HINT_LEVEL};
use crate::core::{GameResult, Mode, TimedRules};
use crate::timer::{TimerEvent, TimerService};

/// One team's Timed-mode turn.
#[derive(Clone, Debug)]
pub struct TimedRound {
    rules: TimedRules,
    words: Vec<String>,
    index: usize,
    guesses: usize,
    hint_level: u8,
    solved: Vec<String>,
    failed: Vec<String>,
    net_points: i64,
    timers: TimerService,
    outcome: Option<TurnOutcome>,
}

impl TimedRound {
    /// Draw the turn's words and start the first word's countdown.
    pub fn setup(ctx: &mut RoundContext<'_>) -> GameResult<Self> {
        let rules = ctx.config.timed.clone();
        let words = ctx.pool.draw_words(
            Mode::Timed,
            rules.word_length,
            rules.words_per_turn,
            ctx.used,
            &mut ctx.rng.words,
        )?;
        debug!(team = %ctx.team, "timed round set up");

        Ok(Self::with_words(words, rules))
    }

    /// Start a turn on known words.
    #[must_use]
    pub fn with_words(words: Vec<String>, rules: TimedRules) -> Self {
        let words: Vec<String> = words.into_iter().map(|w| w.to_uppercase()).collect();
        let mut timers = TimerService::new();
        timers.start(rules.secs_per_word);

        let mut round = Self {
            rules,
            words,
            index: 0,
            guesses: 0,
            hint_level: 0,
            solved: Vec::new(),
            failed: Vec::new(),
            net_points: 0,
            timers,
            outcome: None,
        };
        if round.words.is_empty() {
            round.finish();
        }
        round
    }

    /// The turn's words in play order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// 0-based index of the word in play.
    #[must_use]
    pub fn word_index(&self) -> usize {
        self.index
    }

    /// The word in play, or `None` once the turn is over.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        if self.outcome.is_some() {
            return None;
        }
        self.words.get(self.index).map(String::as_str)
    }

    /// Misses on the current word.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub fn hint_level(&self) -> u8 {
        self.hint_level
    }

    /// Hints shown for the current word.
    #[must_use]
    pub fn hints(&self) -> Vec<String> {
        self.current_word()
            .map(|w| hints_up_to(w, self.hint_level))
            .unwrap_or_default()
    }

    /// Words failed so far this turn.
    #[must_use]
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Words solved so far this turn.
    #[must_use]
    pub fn solved(&self) -> &[String] {
        &self.solved
    }

    fn fail_current(&mut self, ctx: &mut RoundContext<'_>) {
        self.timers.cancel();
        let penalty = -self.rules.fail_penalty;
        ctx.award(penalty);
        self.net_points += penalty;
        let word = self.words[self.index].clone();
        info!(team = %ctx.team, %word, "timed word failed");
        self.failed.push(word);
        self.next_word();
    }

    fn next_word(&mut self) {
        self.index += 1;
        self.guesses = 0;
        self.hint_level = 0;
        if self.index >= self.words.len() {
            self.finish();
        } else {
            self.timers.start(self.rules.secs_per_word);
        }
    }

    fn finish(&mut self) {
        self.timers.cancel_all();
        self.outcome = Some(TurnOutcome::Completed {
            solved: self.solved.clone(),
            failed: self.failed.clone(),
            net_points: self.net_points,
        });
    }
}

impl RoundController for TimedRound {
    fn mode(&self) -> Mode {
        Mode::Timed
    }

    fn outcome(&self) -> Option<&TurnOutcome> {
        self.outcome.as_ref()
    }

    fn submit_guess(&mut self, guess: &str, ctx: &mut RoundContext<'_>) -> GameResult<GuessReport> {
        if self.outcome.is_some() {
            return Err(round_over());
        }
        let guess = normalize_word_guess(guess, self.rules.word_length)?;
        let word = self.words[self.index].clone();
        let correct = guess == word;
        debug!(%guess, correct, word_number = self.index + 1, "timed guess");

        let score_delta = if correct {
            self.timers.cancel();
            let points = self.rules.correct_points;
            ctx.award(points);
            self.net_points += points;
            info!(team = %ctx.team, %word, "timed word solved");
            self.solved.push(word);
            self.next_word();
            points
        } else {
            self.guesses += 1;
            self.hint_level = (self.hint_level + 1).min(MAX_HINT_LEVEL);
            if self.guesses >= self.rules.max_guesses {
                self.fail_current(ctx);
                -self.rules.fail_penalty
            } else {
                0
            }
        };

        Ok(GuessReport {
            correct,
            score_delta,
            turn_over: self.outcome.is_some(),
        })
    }

    fn on_timer(&mut self, event: TimerEvent, ctx: &mut RoundContext<'_>) {
        if event == TimerEvent::Expired && self.guesses < self.rules.max_guesses {
            debug!(word_number = self.index + 1, "timed word expired");
            self.fail_current(ctx);
        }
    }

    fn timers(&self) -> Option<&TimerService> {
        Some(&self.timers)
    }

    fn timers_mut(&mut self) -> Option<&mut TimerService> {
        Some(&mut self.timers)
    }

    fn view(&self) -> RoundView {
        let previous_answer = self
            .index
            .checked_sub(1)
            .and_then(|i| self.words.get(i))
            .cloned();

        RoundView::Timed {
            word_number: (self.index + 1).min(self.words.len()),
            words_total: self.words.len(),
            guesses_used: self.guesses,
            max_guesses: self.rules.max_guesses,
            hints: self.hints(),
            remaining_secs: self.timers.remaining_secs(),
            solved: self.solved.len(),
            failed: self.failed.len(),
            previous_answer,
        }
    }
}
