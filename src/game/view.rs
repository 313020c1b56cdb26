//! Render state handed back to the presentation layer.
//!
//! A [`GameView`] is a complete, owned snapshot: the adapter can serialize
//! it or diff it against the previous one without holding a borrow of the
//! game.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GamePhase, Mode, TeamId};
use crate::rounds::{RoundView, TurnOutcome};
use crate::scoring::TeamScore;

/// Kind of transient message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Transient message shown until the next host event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }
}

/// Rules card shown before a mode starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeIntro {
    pub mode: Mode,
    pub title: String,
    pub rules: Vec<String>,
    pub button_label: String,
}

impl ModeIntro {
    /// Build the card for `mode` from the configured numbers.
    #[must_use]
    pub fn for_mode(mode: Mode, config: &GameConfig) -> Self {
        let rules = match mode {
            Mode::Normal => {
                let n = &config.normal;
                vec![
                    format!(
                        "Guess the {}-letter word in {} attempts.",
                        n.word_length, n.max_guesses
                    ),
                    "Green: correct letter & position".to_string(),
                    "Yellow: correct letter, wrong position".to_string(),
                    "Gray: letter not in word".to_string(),
                    format!("+{} points per correct guess", n.win_points),
                ]
            }
            Mode::Riddle => {
                let r = &config.riddle;
                let mut lines = vec![
                    "Solve riddles with words (5-9 letters).".to_string(),
                    format!("Letters reveal every {} seconds.", r.reveal_every_secs),
                ];
                let last = r.points_by_revealed.len().saturating_sub(1);
                for (revealed, points) in r.points_by_revealed.iter().enumerate() {
                    let line = match revealed {
                        0 => format!("Before letters: {points} points"),
                        n if n == last => format!("{n}+ letters: {points} points"),
                        1 => format!("After 1 letter: {points} points"),
                        n => format!("After {n} letters: {points} points"),
                    };
                    lines.push(line);
                }
                lines.push(format!("Wrong guess: -{} points", r.wrong_guess_penalty));
                lines
            }
            Mode::Timed => {
                let t = &config.timed;
                vec![
                    format!(
                        "{} words, {} seconds each!",
                        t.words_per_turn, t.secs_per_word
                    ),
                    format!("{} guesses per word.", t.max_guesses),
                    format!("Correct guess: +{} points", t.correct_points),
                    format!("All wrong: -{} points", t.fail_penalty),
                ]
            }
        };

        Self {
            mode,
            title: mode.title().to_string(),
            rules,
            button_label: format!("Start {}", mode.title()),
        }
    }
}

/// One entry of the score bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBarEntry {
    pub team: TeamId,
    pub name: String,
    pub score: i64,
    /// Whether this team is the one currently playing.
    pub selected: bool,
}

/// Complete render state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: GamePhase,
    /// Mode being played, or about to be played during its intro.
    pub mode: Option<Mode>,
    /// 1-based round within the mode.
    pub round_number: u32,
    pub rounds_in_mode: u32,
    pub current_team: Option<TeamId>,
    pub score_bar: Vec<ScoreBarEntry>,
    pub intro: Option<ModeIntro>,
    pub round: Option<RoundView>,
    pub paused: bool,
    pub last_guess_correct: Option<bool>,
    pub last_outcome: Option<TurnOutcome>,
    pub notice: Option<Notice>,
    /// Filled in at game over.
    pub final_scores: Option<Vec<TeamScore>>,
}
