//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;
use word_party::core::{GameRng, RngStreams};
use word_party::rounds::RoundContext;
use word_party::{
    ActiveRound, Game, GameBuilder, GameConfig, GamePhase, Mode, ScoreLedger, TeamId, UsedWords,
    WordPool,
};

/// Install a test log subscriber. Honours `RUST_LOG`; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Game state for driving a single round directly.
pub struct Fixture {
    pub config: GameConfig,
    pub pool: WordPool,
    pub used: UsedWords,
    pub ledger: ScoreLedger,
    pub rng: RngStreams,
}

impl Fixture {
    pub fn new(teams: &[&str]) -> Self {
        Self::with_pool(teams, WordPool::builtin())
    }

    pub fn with_pool(teams: &[&str], pool: WordPool) -> Self {
        init_tracing();
        Self {
            config: GameConfig::default(),
            pool,
            used: UsedWords::new(),
            ledger: ScoreLedger::new(teams.iter().map(|t| t.to_string()).collect()),
            rng: RngStreams::new(&GameRng::new(42)),
        }
    }

    pub fn ctx(&mut self, team: u8) -> RoundContext<'_> {
        RoundContext {
            config: &self.config,
            pool: &self.pool,
            used: &mut self.used,
            ledger: &mut self.ledger,
            rng: &mut self.rng,
            team: TeamId::new(team),
        }
    }

    pub fn score(&self, team: u8) -> i64 {
        self.ledger.score(TeamId::new(team))
    }
}

/// Build a seeded game and register `names`, leaving it at the Normal intro.
pub fn start_game(config: GameConfig, names: &[&str]) -> Game {
    init_tracing();
    let mut game = GameBuilder::new()
        .config(config)
        .seed(42)
        .build()
        .unwrap();
    game.choose_team_count(names.len()).unwrap();
    game.enter_team_names(names.iter().map(|n| n.to_string()).collect())
        .unwrap();
    assert_eq!(game.phase(), GamePhase::ModeIntro);
    assert_eq!(game.current_mode(), Some(Mode::Normal));
    game
}

/// Config with one round per mode.
pub fn short_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.normal.rounds = 1;
    config.riddle.rounds = 1;
    config.timed.rounds = 1;
    config
}

/// A well-formed guess that is not `target`.
pub fn wrong_word(target: &str) -> String {
    if target == "ZZZZZ" { "YYYYY" } else { "ZZZZZ" }.to_string()
}

/// Target of the live Normal round.
pub fn normal_target(game: &Game) -> String {
    match game.round() {
        Some(ActiveRound::Normal(round)) => round.target().to_string(),
        other => panic!("expected a normal round, got {other:?}"),
    }
}

/// Answer of the live Riddle round.
pub fn riddle_answer(game: &Game) -> String {
    match game.round() {
        Some(ActiveRound::Riddle(round)) => round.riddle().answer.clone(),
        other => panic!("expected a riddle round, got {other:?}"),
    }
}

/// Words of the live Timed round.
pub fn timed_words(game: &Game) -> Vec<String> {
    match game.round() {
        Some(ActiveRound::Timed(round)) => round.words().to_vec(),
        other => panic!("expected a timed round, got {other:?}"),
    }
}

/// Play the live turn to a loss without scoring anything positive.
pub fn lose_turn(game: &mut Game) {
    assert_eq!(game.phase(), GamePhase::InRound);
    match game.current_mode() {
        Some(Mode::Normal) => {
            let wrong = wrong_word(&normal_target(game));
            for _ in 0..game.config().normal.max_guesses {
                game.submit_guess(&wrong).unwrap();
            }
        }
        Some(Mode::Riddle) => game.advance_secs(game.config().riddle.duration_secs),
        Some(Mode::Timed) => {
            let timed = game.config().timed.clone();
            game.advance_secs(timed.secs_per_word * timed.words_per_turn as u32);
        }
        None => panic!("no mode"),
    }
    assert_ne!(game.phase(), GamePhase::InRound);
}

/// From an intro, play every turn of the mode as a loss.
/// Returns the team that played each turn.
pub fn lose_whole_mode(game: &mut Game) -> Vec<TeamId> {
    assert_eq!(game.phase(), GamePhase::ModeIntro);
    let mode = game.current_mode();
    let mut order = Vec::new();
    game.advance().unwrap();
    loop {
        order.push(game.current_team());
        lose_turn(game);
        if game.phase() == GamePhase::GameOver {
            return order;
        }
        game.advance().unwrap();
        if game.phase() == GamePhase::ModeIntro || game.current_mode() != mode {
            return order;
        }
    }
}
