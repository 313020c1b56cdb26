//! Deterministic random number generation for word and riddle draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws, so whole games
//!   can be replayed in tests
//! - **Context streams**: Independent sequences for word selection, riddle
//!   selection, placeholder names and letter reveals
//!
//! ```
//! use word_party::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut words = rng.for_context("words");
//! let mut again = GameRng::new(42).for_context("words");
//!
//! assert_eq!(words.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    ///
    /// Used for live games where no seed was configured.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Pick `amount` distinct indices from `0..length`, in random order.
    ///
    /// Returns `None` when fewer than `amount` indices exist.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > length {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.inner, length, amount).into_vec())
    }

    /// Generate `len` random lowercase base-36 characters.
    pub fn base36(&mut self, len: usize) -> String {
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        (0..len)
            .map(|_| ALPHABET[self.inner.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Independent RNG streams for the different kinds of draws in a game.
///
/// Keeping them apart means, for example, that the number of letters
/// revealed in a riddle never changes which words a later mode draws.
#[derive(Clone, Debug)]
pub struct RngStreams {
    /// Normal and Timed word selection.
    pub words: GameRng,
    /// Riddle selection.
    pub riddles: GameRng,
    /// Which hidden riddle letter is revealed next.
    pub reveals: GameRng,
    /// Placeholder team names.
    pub names: GameRng,
}

impl RngStreams {
    /// Derive all streams from one root RNG.
    #[must_use]
    pub fn new(root: &GameRng) -> Self {
        Self {
            words: root.for_context("words"),
            riddles: root.for_context("riddles"),
            reveals: root.for_context("reveals"),
            names: root.for_context("names"),
        }
    }
}
