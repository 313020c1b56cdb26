//! Round controllers, one per mode.
//!
//! - `NormalRound`: guess-the-word with letter feedback
//! - `RiddleRound`: riddle with timed letter reveals
//! - `TimedRound`: five-word blitz with hints
//!
//! [`ActiveRound`] is the closed set the game dispatches over.

pub mod controller;
pub mod feedback;
pub mod hint;
pub mod normal;
pub mod riddle;
pub mod timed;

pub use controller::{
    GuessReport, LossReason, RoundContext, RoundController, RoundView, TurnOutcome,
};
pub use feedback::{score_guess, FeedbackRow, LetterFeedback, LetterMark};
pub use normal::NormalRound;
pub use riddle::RiddleRound;
pub use timed::TimedRound;

use crate::core::{GameResult, Mode};
use crate::timer::{TimerEvent, TimerService};

/// The live round of whichever mode is being played.
#[derive(Clone, Debug)]
pub enum ActiveRound {
    Normal(NormalRound),
    Riddle(RiddleRound),
    Timed(TimedRound),
}

impl ActiveRound {
    /// Set up a fresh round for `mode`.
    pub fn setup(mode: Mode, ctx: &mut RoundContext<'_>) -> GameResult<Self> {
        Ok(match mode {
            Mode::Normal => ActiveRound::Normal(NormalRound::setup(ctx)?),
            Mode::Riddle => ActiveRound::Riddle(RiddleRound::setup(ctx)?),
            Mode::Timed => ActiveRound::Timed(TimedRound::setup(ctx)?),
        })
    }

    fn controller(&self) -> &dyn RoundController {
        match self {
            ActiveRound::Normal(r) => r,
            ActiveRound::Riddle(r) => r,
            ActiveRound::Timed(r) => r,
        }
    }

    fn controller_mut(&mut self) -> &mut dyn RoundController {
        match self {
            ActiveRound::Normal(r) => r,
            ActiveRound::Riddle(r) => r,
            ActiveRound::Timed(r) => r,
        }
    }
}

impl RoundController for ActiveRound {
    fn mode(&self) -> Mode {
        self.controller().mode()
    }

    fn outcome(&self) -> Option<&TurnOutcome> {
        self.controller().outcome()
    }

    fn submit_guess(&mut self, guess: &str, ctx: &mut RoundContext<'_>) -> GameResult<GuessReport> {
        self.controller_mut().submit_guess(guess, ctx)
    }

    fn on_timer(&mut self, event: TimerEvent, ctx: &mut RoundContext<'_>) {
        self.controller_mut().on_timer(event, ctx);
    }

    fn timers(&self) -> Option<&TimerService> {
        self.controller().timers()
    }

    fn timers_mut(&mut self) -> Option<&mut TimerService> {
        self.controller_mut().timers_mut()
    }

    fn view(&self) -> RoundView {
        self.controller().view()
    }
}
