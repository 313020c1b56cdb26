//! Riddle mode: solve a riddle while its answer is revealed letter by letter.
//!
//! ## Lifecycle
//!
//! - Setup draws a riddle (riddles may repeat) and starts a 60 s countdown
//!   plus a 7 s reveal interval.
//! - Each interval tick queues one reveal unit; queued units are drained at
//!   once, each showing one random hidden letter. Spaces are never hidden.
//! - A correct answer scores by how many letters were showing: 200, 150,
//!   100, then 50 for three or more.
//! - A wrong answer costs 25 points and the turn goes on; there is no cap
//!   on answers.
//! - Expiry ends the turn with no further points.

use tracing::{debug, info};

use super::controller::{
    round_over, GuessReport, LossReason, RoundContext, RoundController, RoundView, TurnOutcome,
};
use crate::core::{GameError, GameResult, GameRng, Mode};
use crate::timer::{TimerEvent, TimerService};
use crate::words::Riddle;

/// One team's Riddle-mode turn.
#[derive(Clone, Debug)]
pub struct RiddleRound {
    riddle: Riddle,
    answer_chars: Vec<char>,
    revealed: Vec<bool>,
    pending_reveals: u32,
    guesses: u32,
    timers: TimerService,
    outcome: Option<TurnOutcome>,
}

impl RiddleRound {
    /// Draw a riddle and start the countdown and reveal interval.
    pub fn setup(ctx: &mut RoundContext<'_>) -> GameResult<Self> {
        let riddle = ctx.pool.draw_riddle(&mut ctx.rng.riddles)?;
        debug!(team = %ctx.team, answer = %riddle.answer, "riddle round set up");

        let rules = &ctx.config.riddle;
        Ok(Self::with_riddle(riddle, rules.duration_secs, rules.reveal_every_secs))
    }

    /// Start a turn on a known riddle.
    #[must_use]
    pub fn with_riddle(riddle: Riddle, duration_secs: u32, reveal_every_secs: u32) -> Self {
        let riddle = Riddle::new(riddle.riddle, &riddle.answer);
        let answer_chars: Vec<char> = riddle.answer.chars().collect();
        let revealed = answer_chars.iter().map(|&c| c == ' ').collect();

        let mut timers = TimerService::new();
        timers.start(duration_secs);
        timers.start_interval(reveal_every_secs);

        Self {
            riddle,
            answer_chars,
            revealed,
            pending_reveals: 0,
            guesses: 0,
            timers,
            outcome: None,
        }
    }

    /// Number of letters revealed so far. Spaces do not count.
    #[must_use]
    pub fn letters_revealed(&self) -> usize {
        self.answer_chars
            .iter()
            .zip(&self.revealed)
            .filter(|(&c, &shown)| shown && c != ' ')
            .count()
    }

    /// Answer with hidden letters replaced by `_`.
    #[must_use]
    pub fn masked(&self) -> String {
        self.answer_chars
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &shown)| if shown { c } else { '_' })
            .collect()
    }

    /// Answers submitted so far, right or wrong. Blank input is not counted.
    #[must_use]
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// The riddle being played.
    #[must_use]
    pub fn riddle(&self) -> &Riddle {
        &self.riddle
    }

    /// Queue one reveal unit and drain the queue.
    fn queue_reveal(&mut self, rng: &mut GameRng) {
        self.pending_reveals += 1;
        while self.pending_reveals > 0 {
            let hidden: Vec<usize> = self
                .revealed
                .iter()
                .enumerate()
                .filter(|(_, &shown)| !shown)
                .map(|(i, _)| i)
                .collect();
            let Some(&pos) = rng.choose(&hidden) else {
                // Nothing left to show; drop the backlog.
                self.pending_reveals = 0;
                break;
            };
            self.revealed[pos] = true;
            self.pending_reveals -= 1;
            debug!(masked = %self.masked(), "letter revealed");
        }
    }

    fn finish(&mut self, outcome: TurnOutcome) {
        self.timers.cancel_all();
        self.outcome = Some(outcome);
    }
}

impl RoundController for RiddleRound {
    fn mode(&self) -> Mode {
        Mode::Riddle
    }

    fn outcome(&self) -> Option<&TurnOutcome> {
        self.outcome.as_ref()
    }

    fn submit_guess(&mut self, guess: &str, ctx: &mut RoundContext<'_>) -> GameResult<GuessReport> {
        if self.outcome.is_some() {
            return Err(round_over());
        }
        let guess = guess.trim();
        if guess.is_empty() {
            return Err(GameError::EmptyGuess);
        }

        self.guesses += 1;
        let correct = guess.to_uppercase() == self.riddle.answer;
        debug!(%guess, correct, guesses = self.guesses, "riddle guess");

        let score_delta = if correct {
            let revealed = self.letters_revealed();
            let points = ctx.config.riddle.points_for(revealed);
            ctx.award(points);
            info!(team = %ctx.team, answer = %self.riddle.answer, revealed, points, "riddle solved");
            self.finish(TurnOutcome::Won {
                answer: self.riddle.answer.clone(),
                points,
            });
            points
        } else {
            let penalty = -ctx.config.riddle.wrong_guess_penalty;
            ctx.award(penalty);
            penalty
        };

        Ok(GuessReport {
            correct,
            score_delta,
            turn_over: self.outcome.is_some(),
        })
    }

    fn on_timer(&mut self, event: TimerEvent, ctx: &mut RoundContext<'_>) {
        match event {
            TimerEvent::Interval => self.queue_reveal(&mut ctx.rng.reveals),
            TimerEvent::Expired => {
                info!(team = %ctx.team, answer = %self.riddle.answer, "riddle timed out");
                self.finish(TurnOutcome::Lost {
                    answer: self.riddle.answer.clone(),
                    reason: LossReason::TimedOut,
                });
            }
        }
    }

    fn timers(&self) -> Option<&TimerService> {
        Some(&self.timers)
    }

    fn timers_mut(&mut self) -> Option<&mut TimerService> {
        Some(&mut self.timers)
    }

    fn view(&self) -> RoundView {
        RoundView::Riddle {
            riddle: self.riddle.riddle.clone(),
            masked: self.masked(),
            letters_revealed: self.letters_revealed(),
            guesses: self.guesses,
            remaining_secs: self.timers.remaining_secs(),
            answer: self.outcome.as_ref().map(|_| self.riddle.answer.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> RiddleRound {
        RiddleRound::with_riddle(Riddle::new("I have keys but no locks.", "keyboard"), 60, 7)
    }

    #[test]
    fn test_starts_fully_hidden() {
        let round = keyboard();
        assert_eq!(round.masked(), "________");
        assert_eq!(round.letters_revealed(), 0);
        assert_eq!(round.timers.remaining_secs(), Some(60));
        assert!(round.timers.interval_active());
    }

    #[test]
    fn test_spaces_always_shown() {
        let round = RiddleRound::with_riddle(Riddle::new("r", "the moon"), 60, 7);
        assert_eq!(round.masked(), "___ ____");
        assert_eq!(round.letters_revealed(), 0);
    }

    #[test]
    fn test_reveal_until_exhausted() {
        let mut round = RiddleRound::with_riddle(Riddle::new("r", "a b"), 60, 7);
        let mut rng = GameRng::new(3);

        round.queue_reveal(&mut rng);
        assert_eq!(round.letters_revealed(), 1);
        round.queue_reveal(&mut rng);
        assert_eq!(round.masked(), "A B");

        // Nothing hidden: the unit is discarded, not kept as backlog.
        round.queue_reveal(&mut rng);
        assert_eq!(round.pending_reveals, 0);
        assert_eq!(round.letters_revealed(), 2);
    }
}
