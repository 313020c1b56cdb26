//! Host events: everything the presentation layer can send into a game.

use serde::{Deserialize, Serialize};

/// An action from the host's screen or the clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Number of teams picked on the setup screen.
    TeamCountChosen(usize),
    /// Names typed on the name-entry screen, in team order.
    TeamNamesEntered(Vec<String>),
    /// Continue button (intro card, round end, or resume after a pause).
    ContinuePressed,
    /// A guess typed by the current team.
    GuessSubmitted(String),
    /// Host clicked a team in the score bar.
    TeamSelected(usize),
    /// One second elapsed.
    Tick,
    /// Play-again button on the final screen.
    PlayAgainPressed,
}

impl HostEvent {
    /// Short name used in logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::TeamCountChosen(_) => "team count",
            HostEvent::TeamNamesEntered(_) => "team names",
            HostEvent::ContinuePressed => "continue",
            HostEvent::GuessSubmitted(_) => "guess",
            HostEvent::TeamSelected(_) => "team selection",
            HostEvent::Tick => "tick",
            HostEvent::PlayAgainPressed => "play again",
        }
    }
}
