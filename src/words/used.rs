//! Set of words already served this game.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

/// Words served in Normal or Timed mode during the current game.
///
/// Grows monotonically until [`UsedWords::clear`] on a full reset. Backed by
/// a persistent set so cloning a game state stays cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWords {
    words: ImHashSet<String>,
}

impl UsedWords {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word as served. Returns false if it was already used.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into()).is_none()
    }

    /// Check whether a word has been served.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words served.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words have been served yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Forget every served word. Only used by a full game reset.
    pub fn clear(&mut self) {
        self.words = ImHashSet::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut used = UsedWords::new();
        assert!(used.is_empty());

        assert!(used.insert("CRANE"));
        assert!(!used.insert("CRANE"));
        assert!(used.contains("CRANE"));
        assert!(!used.contains("APPLE"));
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut used = UsedWords::new();
        used.insert("APPLE");
        let snapshot = used.clone();
        used.insert("BEACH");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut used = UsedWords::new();
        used.insert("EAGLE");
        used.clear();
        assert!(used.is_empty());
    }
}
