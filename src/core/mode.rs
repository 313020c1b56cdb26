//! Mini-game modes and overall game phases.

use serde::{Deserialize, Serialize};

/// One of the three mini-games.
///
/// Modes are always played in the fixed order given by [`Mode::ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Guess a 5-letter word in 6 attempts with per-letter feedback.
    Normal,
    /// Solve a riddle while its answer is revealed letter by letter.
    Riddle,
    /// Five words against the clock, with escalating hints.
    Timed,
}

impl Mode {
    /// Play order of the modes in a game.
    pub const ORDER: [Mode; 3] = [Mode::Normal, Mode::Riddle, Mode::Timed];

    /// The first mode of a game.
    #[must_use]
    pub const fn first() -> Self {
        Mode::Normal
    }

    /// The mode played after this one, or `None` after the final mode.
    ///
    /// ```
    /// use word_party::core::Mode;
    ///
    /// assert_eq!(Mode::Normal.next(), Some(Mode::Riddle));
    /// assert_eq!(Mode::Riddle.next(), Some(Mode::Timed));
    /// assert_eq!(Mode::Timed.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Mode::Normal => Some(Mode::Riddle),
            Mode::Riddle => Some(Mode::Timed),
            Mode::Timed => None,
        }
    }

    /// Display title of the mode.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Mode::Normal => "Normal Mode",
            Mode::Riddle => "Riddle Mode",
            Mode::Timed => "Timed Mode",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Overall phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host to choose the number of teams.
    Setup,
    /// Waiting for team names.
    NameEntry,
    /// Showing the rules card of the upcoming mode.
    ModeIntro,
    /// A team's turn is being played.
    InRound,
    /// A team's turn just ended; waiting for the host to continue.
    RoundEnd,
    /// All modes played; the score ledger is final.
    GameOver,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::NameEntry => "name entry",
            GamePhase::ModeIntro => "mode intro",
            GamePhase::InRound => "in round",
            GamePhase::RoundEnd => "round end",
            GamePhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_next_chain() {
        let mut chain = vec![Mode::first()];
        while let Some(next) = chain.last().and_then(|m| m.next()) {
            chain.push(next);
        }
        assert_eq!(chain, Mode::ORDER.to_vec());
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&Mode::Riddle).unwrap();
        assert_eq!(json, "\"Riddle\"");
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::Riddle);
    }
}
