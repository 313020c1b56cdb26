//! Game configuration: per-mode rule tables.
//!
//! Every number the round controllers use (word lengths, guess caps, points,
//! penalties, timer durations, round counts) lives here so a host can tune a
//! game without touching the engine. `GameConfig::default()` gives the
//! standard party rules.
//!
//! ```
//! use word_party::core::GameConfig;
//!
//! let config = GameConfig::default().with_seed(7);
//! assert_eq!(config.normal.win_points, 50);
//! assert_eq!(config.riddle.duration_secs, 60);
//! assert_eq!(config.timed.words_per_turn, 5);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::mode::Mode;

/// Rules for Normal mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalRules {
    /// Letters per target word.
    pub word_length: usize,
    /// Guesses allowed before the turn fails.
    pub max_guesses: usize,
    /// Points for guessing the word.
    pub win_points: i64,
    /// Rounds (full passes through all teams) in the mode.
    pub rounds: u32,
}

impl Default for NormalRules {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
            win_points: 50,
            rounds: 5,
        }
    }
}

/// Rules for Riddle mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiddleRules {
    /// Seconds to solve a riddle.
    pub duration_secs: u32,
    /// Seconds between letter reveals.
    pub reveal_every_secs: u32,
    /// Points for a correct answer, indexed by letters revealed so far.
    /// The last entry applies to every count at or beyond its index.
    pub points_by_revealed: Vec<i64>,
    /// Points deducted for each wrong answer.
    pub wrong_guess_penalty: i64,
    /// Rounds in the mode.
    pub rounds: u32,
}

impl RiddleRules {
    /// Points for a correct answer after `revealed` letters were shown.
    #[must_use]
    pub fn points_for(&self, revealed: usize) -> i64 {
        self.points_by_revealed
            .get(revealed)
            .or_else(|| self.points_by_revealed.last())
            .copied()
            .unwrap_or(0)
    }
}

impl Default for RiddleRules {
    fn default() -> Self {
        Self {
            duration_secs: 60,
            reveal_every_secs: 7,
            points_by_revealed: vec![200, 150, 100, 50],
            wrong_guess_penalty: 25,
            rounds: 3,
        }
    }
}

/// Rules for Timed mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimedRules {
    /// Words each team plays per turn.
    pub words_per_turn: usize,
    /// Letters per word.
    pub word_length: usize,
    /// Countdown per word.
    pub secs_per_word: u32,
    /// Guesses allowed per word.
    pub max_guesses: usize,
    /// Points for a correct word.
    pub correct_points: i64,
    /// Points deducted for a failed word (guesses used up or timeout).
    pub fail_penalty: i64,
    /// Rounds in the mode.
    pub rounds: u32,
}

impl Default for TimedRules {
    fn default() -> Self {
        Self {
            words_per_turn: 5,
            word_length: 5,
            secs_per_word: 30,
            max_guesses: 3,
            correct_points: 100,
            fail_penalty: 50,
            rounds: 1,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Largest team count the host may choose.
    pub max_teams: usize,
    /// RNG seed. `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Normal mode rules.
    pub normal: NormalRules,
    /// Riddle mode rules.
    pub riddle: RiddleRules,
    /// Timed mode rules.
    pub timed: TimedRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_teams: 8,
            seed: None,
            normal: NormalRules::default(),
            riddle: RiddleRules::default(),
            timed: TimedRules::default(),
        }
    }
}

impl GameConfig {
    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum team count.
    #[must_use]
    pub fn with_max_teams(mut self, max_teams: usize) -> Self {
        self.max_teams = max_teams;
        self
    }

    /// Replace the Normal mode rules.
    #[must_use]
    pub fn with_normal(mut self, rules: NormalRules) -> Self {
        self.normal = rules;
        self
    }

    /// Replace the Riddle mode rules.
    #[must_use]
    pub fn with_riddle(mut self, rules: RiddleRules) -> Self {
        self.riddle = rules;
        self
    }

    /// Replace the Timed mode rules.
    #[must_use]
    pub fn with_timed(mut self, rules: TimedRules) -> Self {
        self.timed = rules;
        self
    }

    /// Rounds played in `mode`.
    #[must_use]
    pub fn rounds(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Normal => self.normal.rounds,
            Mode::Riddle => self.riddle.rounds,
            Mode::Timed => self.timed.rounds,
        }
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject rule tables the engine cannot run.
    pub fn validate(&self) -> GameResult<()> {
        let fail = |msg: &str| Err(GameError::Config(msg.to_string()));

        if self.max_teams == 0 || self.max_teams > 255 {
            return fail("max_teams must be between 1 and 255");
        }
        if self.normal.word_length == 0 || self.timed.word_length == 0 {
            return fail("word length must be positive");
        }
        if self.normal.max_guesses == 0 || self.timed.max_guesses == 0 {
            return fail("guess caps must be positive");
        }
        if self.riddle.duration_secs == 0 || self.timed.secs_per_word == 0 {
            return fail("timer durations must be positive");
        }
        if self.riddle.reveal_every_secs == 0 {
            return fail("reveal interval must be positive");
        }
        if self.riddle.points_by_revealed.is_empty() {
            return fail("riddle points table is empty");
        }
        if self.timed.words_per_turn == 0 {
            return fail("timed mode needs at least one word per turn");
        }
        if Mode::ORDER.iter().any(|&m| self.rounds(m) == 0) {
            return fail("every mode needs at least one round");
        }
        Ok(())
    }
}
