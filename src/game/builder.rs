//! Builder for creating a [`Game`].

use tracing::debug;

use super::sequencer::Game;
use crate::core::{GameConfig, GameResult, GameRng, RngStreams};
use crate::words::WordPool;

/// Builder for creating a Game.
///
/// ```
/// use word_party::game::GameBuilder;
/// use word_party::core::GamePhase;
///
/// let game = GameBuilder::new().seed(42).build().unwrap();
/// assert_eq!(game.phase(), GamePhase::Setup);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    pool: Option<WordPool>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a full configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use a ready-made word pool.
    pub fn word_pool(mut self, pool: WordPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Load the word pool from JSON sources, falling back to the built-in
    /// lists for any that are missing or unreadable.
    pub fn word_sources(mut self, words_json: Option<&str>, riddles_json: Option<&str>) -> Self {
        self.pool = Some(WordPool::from_sources(words_json, riddles_json));
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> GameResult<Game> {
        self.config.validate()?;

        let root = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let pool = self.pool.unwrap_or_else(WordPool::builtin);
        debug!(
            seed = root.seed(),
            words = pool.words().len(),
            riddles = pool.riddles().len(),
            "game built"
        );

        Ok(Game::new(self.config, pool, RngStreams::new(&root)))
    }
}
