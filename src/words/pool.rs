//! Word pool: the word and riddle lists a game draws from.
//!
//! ## Data format
//!
//! Words are a flat JSON array of strings; riddles are an array of
//! `{ "riddle": ..., "answer": ... }` objects. Words are upper-cased on load.
//! Entries that fail basic shape checks (non-letters in a word, riddle
//! answers outside 5-9 letters) are dropped.
//!
//! ## Fallback
//!
//! A missing or unparseable source is replaced by the built-in list so the
//! game stays playable.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::builtin::{DEFAULT_RIDDLES, DEFAULT_WORDS};
use super::used::UsedWords;
use crate::core::{GameError, GameResult, GameRng, Mode};

/// Allowed riddle answer length, counting letters only.
pub const RIDDLE_ANSWER_LETTERS: std::ops::RangeInclusive<usize> = 5..=9;

/// A riddle and its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    /// Riddle text shown to the players.
    pub riddle: String,
    /// Expected answer. Upper-cased on load; may contain spaces.
    pub answer: String,
}

impl Riddle {
    /// Create a riddle, normalising the answer to upper case.
    pub fn new(riddle: impl Into<String>, answer: &str) -> Self {
        Self {
            riddle: riddle.into(),
            answer: answer.trim().to_uppercase(),
        }
    }

    /// Number of non-space characters in the answer.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.answer.chars().filter(|c| *c != ' ').count()
    }
}

/// Word and riddle lists for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
    riddles: Vec<Riddle>,
}

impl Default for WordPool {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordPool {
    /// Build a pool from raw lists, normalising and filtering entries.
    pub fn new<W, R>(words: W, riddles: R) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        R: IntoIterator<Item = Riddle>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for word in words {
            let raw = word.as_ref().trim();
            if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
                debug!(word = %raw, "dropping malformed word");
                continue;
            }
            let word = raw.to_ascii_uppercase();
            if !normalized.contains(&word) {
                normalized.push(word);
            }
        }

        let riddles = riddles
            .into_iter()
            .map(|r| Riddle::new(r.riddle, &r.answer))
            .filter(|r| {
                let ok = RIDDLE_ANSWER_LETTERS.contains(&r.letter_count());
                if !ok {
                    debug!(answer = %r.answer, "dropping riddle with out-of-range answer");
                }
                ok
            })
            .collect();

        Self {
            words: normalized,
            riddles,
        }
    }

    /// The built-in fallback pool.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_WORDS.iter().copied(),
            DEFAULT_RIDDLES.iter().map(|(riddle, answer)| Riddle::new(*riddle, answer)),
        )
    }

    /// Build a pool from optional JSON sources.
    ///
    /// A source that is `None`, unparseable, or empty after filtering is
    /// replaced by the built-in list.
    #[must_use]
    pub fn from_sources(words_json: Option<&str>, riddles_json: Option<&str>) -> Self {
        let builtin = Self::builtin();

        let words = match words_json.map(parse_words) {
            Some(Ok(words)) => words,
            Some(Err(err)) => {
                warn!(%err, "word list unreadable, using built-in words");
                Vec::new()
            }
            None => {
                warn!("no word list supplied, using built-in words");
                Vec::new()
            }
        };
        let riddles = match riddles_json.map(parse_riddles) {
            Some(Ok(riddles)) => riddles,
            Some(Err(err)) => {
                warn!(%err, "riddle list unreadable, using built-in riddles");
                Vec::new()
            }
            None => {
                warn!("no riddle list supplied, using built-in riddles");
                Vec::new()
            }
        };

        let mut pool = Self::new(words, riddles);
        if pool.words.is_empty() {
            pool.words = builtin.words;
        }
        if pool.riddles.is_empty() {
            pool.riddles = builtin.riddles;
        }
        pool
    }

    /// All words in the pool.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// All riddles in the pool.
    #[must_use]
    pub fn riddles(&self) -> &[Riddle] {
        &self.riddles
    }

    /// Words of `length` letters not yet in `used`.
    pub fn available<'a>(
        &'a self,
        length: usize,
        used: &'a UsedWords,
    ) -> impl Iterator<Item = &'a String> + 'a {
        self.words
            .iter()
            .filter(move |w| w.chars().count() == length && !used.contains(w))
    }

    /// Draw one unused word of `length` letters and mark it used.
    pub fn draw_word(
        &self,
        mode: Mode,
        length: usize,
        used: &mut UsedWords,
        rng: &mut GameRng,
    ) -> GameResult<String> {
        let mut words = self.draw_words(mode, length, 1, used, rng)?;
        words.pop().ok_or(GameError::PoolExhausted {
            mode,
            needed: 1,
            available: 0,
        })
    }

    /// Draw `count` distinct unused words of `length` letters and mark them used.
    ///
    /// Nothing is marked used if the pool cannot supply all of them.
    pub fn draw_words(
        &self,
        mode: Mode,
        length: usize,
        count: usize,
        used: &mut UsedWords,
        rng: &mut GameRng,
    ) -> GameResult<Vec<String>> {
        let drawn: Vec<String> = {
            let candidates: Vec<&String> = self.available(length, &*used).collect();
            let indices = rng
                .sample_indices(candidates.len(), count)
                .ok_or(GameError::PoolExhausted {
                    mode,
                    needed: count,
                    available: candidates.len(),
                })?;
            indices.into_iter().map(|i| candidates[i].clone()).collect()
        };

        for word in &drawn {
            used.insert(word.clone());
        }
        debug!(?mode, ?drawn, used = used.len(), "drew words");
        Ok(drawn)
    }

    /// Draw a riddle uniformly at random. Riddles may repeat within a game.
    pub fn draw_riddle(&self, rng: &mut GameRng) -> GameResult<Riddle> {
        rng.choose(&self.riddles)
            .cloned()
            .ok_or(GameError::PoolExhausted {
                mode: Mode::Riddle,
                needed: 1,
                available: 0,
            })
    }
}

/// Parse a JSON array of words.
pub fn parse_words(json: &str) -> GameResult<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of `{ riddle, answer }` objects.
pub fn parse_riddles(json: &str) -> GameResult<Vec<Riddle>> {
    Ok(serde_json::from_str(json)?)
}
