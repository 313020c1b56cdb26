//! Word pool and the Used-Words set.
//!
//! The pool owns the raw lists; selection never returns a word that is in
//! the game's [`UsedWords`] set.

pub mod builtin;
pub mod pool;
pub mod used;

pub use pool::{parse_riddles, parse_words, Riddle, WordPool, RIDDLE_ANSWER_LETTERS};
pub use used::UsedWords;
