//! Escalating hints for Timed mode.
//!
//! | Level | Hint |
//! |-------|------|
//! | 1 | multiplicity of repeated letters ("Contains 2 'P's") |
//! | 2 | first letter |
//! | 3 | vowel count |
//!
//! Hints accumulate: at level 2 both the level-1 and level-2 hints are shown.

use rustc_hash::FxHashMap;

/// Highest hint level.
pub const MAX_HINT_LEVEL: u8 = 3;

/// The hint shown at `level` for `word`. Level 0 has no hint.
#[must_use]
pub fn hint_for(word: &str, level: u8) -> Option<String> {
    match level {
        1 => Some(repeated_letters(word)),
        2 => word.chars().next().map(|c| format!("Starts with '{c}'")),
        3 => Some(vowel_count(word)),
        _ => None,
    }
}

/// Every hint from level 1 up to and including `level`.
#[must_use]
pub fn hints_up_to(word: &str, level: u8) -> Vec<String> {
    (1..=level.min(MAX_HINT_LEVEL))
        .filter_map(|l| hint_for(word, l))
        .collect()
}

fn repeated_letters(word: &str) -> String {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    // Report in order of first appearance.
    let mut seen = Vec::new();
    let parts: Vec<String> = word
        .chars()
        .filter(|c| counts[c] > 1)
        .filter(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(*c);
                true
            }
        })
        .map(|c| format!("{} '{}'s", counts[&c], c))
        .collect();

    if parts.is_empty() {
        "No repeated letters".to_string()
    } else {
        format!("Contains {}", parts.join(" and "))
    }
}

fn vowel_count(word: &str) -> String {
    let vowels = word
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U'))
        .count();
    match vowels {
        1 => "Contains 1 vowel".to_string(),
        n => format!("Contains {n} vowels"),
    }
}
