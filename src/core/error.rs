//! Engine error type.

use thiserror::Error;

use super::mode::{GamePhase, Mode};

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

/// Everything that can go wrong while driving a game.
///
/// Guess-shape errors and events sent in the wrong phase are recoverable:
/// the game state is left untouched. The rest abort the operation that
/// raised them and must be shown to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess does not have the required number of letters.
    #[error("Please enter a {expected}-letter word (got {actual} characters)")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// Empty riddle answer.
    #[error("Please enter an answer")]
    EmptyGuess,

    /// Not enough unused words left to set up a turn.
    #[error("{mode}: word pool exhausted (needed {needed}, {available} unused)")]
    PoolExhausted {
        mode: Mode,
        needed: usize,
        available: usize,
    },

    /// A game needs at least one team.
    #[error("a game needs at least one team")]
    NoTeams,

    /// More teams than the configuration allows.
    #[error("team count {count} exceeds the maximum of {max}")]
    InvalidTeamCount { count: usize, max: usize },

    /// Number of submitted names differs from the chosen team count.
    #[error("expected {expected} team names, got {actual}")]
    TeamNameCount { expected: usize, actual: usize },

    /// Host selected a team index that does not exist.
    #[error("team index {index} out of range for {count} teams")]
    TeamOutOfRange { index: usize, count: usize },

    /// Host event not accepted in the current phase.
    #[error("{event} is not accepted during {phase}")]
    UnexpectedEvent {
        event: &'static str,
        phase: GamePhase,
    },

    /// Rule table rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Word list data could not be parsed.
    #[error("invalid word list: {0}")]
    WordList(String),
}

impl GameError {
    /// Whether the game can carry on unchanged after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidGuessLength { .. }
                | GameError::EmptyGuess
                | GameError::UnexpectedEvent { .. }
                | GameError::TeamOutOfRange { .. }
        )
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::WordList(err.to_string())
    }
}
