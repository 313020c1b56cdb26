//! Per-letter guess feedback for Normal mode.
//!
//! Each guessed letter is judged on its own: `Correct` when it matches the
//! target at the same position, `Present` when the target contains it
//! anywhere else, `Absent` otherwise. Repeated letters are not de-duplicated,
//! so a guess with two `P`s against a target with one marks both `Present`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Judgement for one guessed letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterFeedback {
    /// Same letter in the same position.
    Correct,
    /// Letter occurs elsewhere in the target.
    Present,
    /// Letter does not occur in the target.
    Absent,
}

/// A guessed letter with its judgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterMark {
    pub letter: char,
    pub feedback: LetterFeedback,
}

/// One row of the feedback grid. Inline for 5-letter words.
pub type FeedbackRow = SmallVec<[LetterMark; 5]>;

/// Judge `guess` against `target`. Both must already be upper-cased.
///
/// ```
/// use word_party::rounds::feedback::{score_guess, LetterFeedback::*};
///
/// let row = score_guess("CRANE", "CARES");
/// let marks: Vec<_> = row.iter().map(|m| m.feedback).collect();
/// assert_eq!(marks, vec![Correct, Present, Present, Present, Absent]);
/// ```
#[must_use]
pub fn score_guess(target: &str, guess: &str) -> FeedbackRow {
    let target: SmallVec<[char; 5]> = target.chars().collect();

    guess
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let feedback = if target.get(i) == Some(&letter) {
                LetterFeedback::Correct
            } else if target.contains(&letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
            LetterMark { letter, feedback }
        })
        .collect()
}

/// Whether every letter in a row is `Correct`.
#[must_use]
pub fn is_solved(row: &FeedbackRow) -> bool {
    row.iter().all(|m| m.feedback == LetterFeedback::Correct)
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::*;
    use super::*;

    fn marks(target: &str, guess: &str) -> Vec<LetterFeedback> {
        score_guess(target, guess).iter().map(|m| m.feedback).collect()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(marks("CRANE", "CRANE"), vec![Correct; 5]);
        assert!(is_solved(&score_guess("CRANE", "CRANE")));
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(marks("CRANE", "BUILT"), vec![Absent; 5]);
    }

    #[test]
    fn test_duplicates_not_deduplicated() {
        // One P in the target, both guessed Ps outside its position.
        assert_eq!(marks("PLANT", "APPLE"), vec![Present, Present, Present, Present, Absent]);
    }

    #[test]
    fn test_letters_are_kept() {
        let row = score_guess("EAGLE", "GLEAM");
        let letters: String = row.iter().map(|m| m.letter).collect();
        assert_eq!(letters, "GLEAM");
        assert!(!is_solved(&row));
    }
}
