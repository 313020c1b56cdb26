//! Riddle mode integration tests.
//!
//! Covers reveal timing, the reveal-based point table, wrong-answer
//! penalties and the guarantee that a finished turn's timers never fire.

mod common;

use common::{lose_whole_mode, riddle_answer, start_game, Fixture};
use word_party::{
    GameConfig, GameError, GamePhase, LossReason, Mode, Riddle, RiddleRound, RoundController,
    RoundView, TeamId, TurnOutcome,
};

fn keyboard() -> RiddleRound {
    RiddleRound::with_riddle(
        Riddle::new("I have keys but open no locks. What am I?", "keyboard"),
        60,
        7,
    )
}

fn tick_n(round: &mut RiddleRound, fx: &mut Fixture, secs: u32) {
    for _ in 0..secs {
        round.tick(&mut fx.ctx(0));
    }
}

/// Drive a game to the first Riddle turn.
fn riddle_game(names: &[&str]) -> word_party::Game {
    let mut config = GameConfig::default();
    config.normal.rounds = 1;
    let mut game = start_game(config, names);
    lose_whole_mode(&mut game);
    assert_eq!(game.current_mode(), Some(Mode::Riddle));
    game.advance().unwrap();
    assert_eq!(game.phase(), GamePhase::InRound);
    game
}

// =============================================================================
// Reveals and scoring
// =============================================================================

/// Answer "KEYBOARD" after two reveals (14 s) scores 100.
#[test]
fn test_keyboard_after_two_reveals() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    tick_n(&mut round, &mut fx, 14);
    assert_eq!(round.letters_revealed(), 2);
    assert_eq!(round.remaining_secs(), Some(46));

    let report = round.submit_guess("Keyboard", &mut fx.ctx(0)).unwrap();
    assert!(report.correct);
    assert_eq!(report.score_delta, 100);
    assert_eq!(fx.score(0), 100);
    assert_eq!(
        round.outcome(),
        Some(&TurnOutcome::Won {
            answer: "KEYBOARD".into(),
            points: 100
        })
    );
}

/// Points fall 200, 150, 100, then stay at 50.
#[test]
fn test_points_by_letters_revealed() {
    for (secs, expected) in [(0, 200), (7, 150), (14, 100), (21, 50), (49, 50)] {
        let mut fx = Fixture::new(&["A"]);
        let mut round = keyboard();
        tick_n(&mut round, &mut fx, secs);

        let report = round.submit_guess("KEYBOARD", &mut fx.ctx(0)).unwrap();
        assert_eq!(report.score_delta, expected, "after {secs} s");
    }
}

/// Reveals land every seven seconds and never between.
#[test]
fn test_reveal_cadence() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    tick_n(&mut round, &mut fx, 6);
    assert_eq!(round.letters_revealed(), 0);
    tick_n(&mut round, &mut fx, 1);
    assert_eq!(round.letters_revealed(), 1);
    tick_n(&mut round, &mut fx, 6);
    assert_eq!(round.letters_revealed(), 1);
    tick_n(&mut round, &mut fx, 1);
    assert_eq!(round.letters_revealed(), 2);

    let masked = round.masked();
    assert_eq!(masked.chars().filter(|&c| c == '_').count(), 6);
    for (shown, actual) in masked.chars().zip("KEYBOARD".chars()) {
        assert!(shown == '_' || shown == actual);
    }
}

/// Answers containing spaces match regardless of case.
#[test]
fn test_multi_word_answer() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = RiddleRound::with_riddle(Riddle::new("What lights the night?", "The Moon"), 60, 7);
    assert_eq!(round.masked(), "___ ____");

    let report = round.submit_guess("  the moon ", &mut fx.ctx(0)).unwrap();
    assert!(report.correct);
    assert_eq!(fx.score(0), 200);
}

// =============================================================================
// Wrong answers
// =============================================================================

/// Every wrong answer costs 25 and the turn continues.
#[test]
fn test_wrong_answers_uncapped() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    for i in 1..=10 {
        let report = round.submit_guess("piano", &mut fx.ctx(0)).unwrap();
        assert!(!report.correct);
        assert!(!report.turn_over);
        assert_eq!(report.score_delta, -25);
        assert_eq!(round.guesses(), i);
    }
    assert_eq!(fx.score(0), -250);
    assert!(!round.is_finished());
}

/// Every submitted answer counts, including the one that solves it.
#[test]
fn test_guess_count_includes_correct_answer() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    round.submit_guess("piano", &mut fx.ctx(0)).unwrap();
    round.submit_guess("mouse", &mut fx.ctx(0)).unwrap();
    round.submit_guess("keyboard", &mut fx.ctx(0)).unwrap();

    assert_eq!(round.guesses(), 3);
    assert_eq!(fx.score(0), 200 - 50);
    match round.view() {
        RoundView::Riddle { guesses, .. } => assert_eq!(guesses, 3),
        other => panic!("unexpected view {other:?}"),
    }
}

/// Blank input is rejected for free.
#[test]
fn test_empty_guess_free() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    let err = round.submit_guess("   ", &mut fx.ctx(0)).unwrap_err();
    assert_eq!(err, GameError::EmptyGuess);
    assert!(err.is_recoverable());
    assert_eq!(fx.score(0), 0);
    assert_eq!(round.guesses(), 0);
}

// =============================================================================
// Expiry and cancellation
// =============================================================================

/// Sixty seconds without an answer ends the turn with no points.
#[test]
fn test_timeout() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    tick_n(&mut round, &mut fx, 59);
    assert!(!round.is_finished());
    tick_n(&mut round, &mut fx, 1);

    assert_eq!(
        round.outcome(),
        Some(&TurnOutcome::Lost {
            answer: "KEYBOARD".into(),
            reason: LossReason::TimedOut
        })
    );
    assert_eq!(fx.score(0), 0);
    assert!(!round.has_pending_timers());
    match round.view() {
        RoundView::Riddle { answer, .. } => assert_eq!(answer.as_deref(), Some("KEYBOARD")),
        other => panic!("unexpected view {other:?}"),
    }
}

/// A correct answer at 40 s stops the clock; later ticks change nothing.
#[test]
fn test_timers_cancelled_on_solve() {
    let mut fx = Fixture::new(&["A"]);
    let mut round = keyboard();

    tick_n(&mut round, &mut fx, 40);
    assert_eq!(round.letters_revealed(), 5);
    round.submit_guess("keyboard", &mut fx.ctx(0)).unwrap();
    assert_eq!(fx.score(0), 50);
    assert!(!round.has_pending_timers());

    let view = round.view();
    let outcome = round.outcome().cloned();
    tick_n(&mut round, &mut fx, 7);

    assert_eq!(round.view(), view);
    assert_eq!(round.outcome().cloned(), outcome);
    assert_eq!(round.letters_revealed(), 5);
    assert_eq!(fx.score(0), 50);
}

/// Same guarantee through the game: ticks after the turn leave it alone.
#[test]
fn test_game_ticks_after_solve_ignored() {
    let mut game = riddle_game(&["A", "B"]);

    game.advance_secs(40);
    let answer = riddle_answer(&game);
    game.submit_guess(&answer).unwrap();
    assert_eq!(game.phase(), GamePhase::RoundEnd);

    let view = game.view();
    game.advance_secs(7);
    assert_eq!(game.view(), view);
}

// =============================================================================
// Sequencing
// =============================================================================

/// Riddle mode runs three rounds, then the Timed intro.
#[test]
fn test_three_rounds_then_timed() {
    let mut config = GameConfig::default();
    config.normal.rounds = 1;
    let mut game = start_game(config, &["A", "B"]);
    lose_whole_mode(&mut game);
    assert_eq!(game.current_mode(), Some(Mode::Riddle));

    let order = lose_whole_mode(&mut game);
    assert_eq!(order.len(), 6);
    assert_eq!(
        order,
        [0, 1, 0, 1, 0, 1].map(TeamId::new).to_vec()
    );
    assert_eq!(game.phase(), GamePhase::ModeIntro);
    assert_eq!(game.current_mode(), Some(Mode::Timed));
}

/// Each riddle turn starts with the first team in the first round.
#[test]
fn test_mode_starts_with_first_team() {
    let game = riddle_game(&["A", "B", "C"]);
    assert_eq!(game.current_team(), TeamId::new(0));
    assert_eq!(game.round_number(), 1);
    match game.view().round {
        Some(RoundView::Riddle {
            letters_revealed,
            remaining_secs,
            ..
        }) => {
            assert_eq!(letters_revealed, 0);
            assert_eq!(remaining_secs, Some(60));
        }
        other => panic!("unexpected view {other:?}"),
    }
}
