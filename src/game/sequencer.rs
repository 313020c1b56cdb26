//! Mode sequencer: the top-level game state machine.
//!
//! ## Phases
//!
//! ```text
//! Setup -> NameEntry -> ModeIntro -> InRound <-> RoundEnd
//!                          ^                       |
//!                          +---- next mode --------+
//!                                                  |
//!                         GameOver <-- after Timed -+
//! ```
//!
//! Modes run in the fixed order Normal, Riddle, Timed. Within a mode every
//! team plays one turn per round, round-robin in registration order; Normal
//! has 5 rounds, Riddle 3 and Timed 1 (all configurable). Every mode starts
//! with the first team.
//!
//! All state lives in [`Game`] and is lent to the active round through a
//! [`RoundContext`] for the duration of one event, so every score and round
//! mutation is complete before a host call returns.

use tracing::{debug, info, warn};

use super::events::HostEvent;
use super::view::{GameView, ModeIntro, Notice, ScoreBarEntry};
use crate::core::{
    GameConfig, GameError, GamePhase, GameResult, GameRng, Mode, RngStreams, TeamId,
};
use crate::rounds::{ActiveRound, GuessReport, RoundContext, RoundController, TurnOutcome};
use crate::scoring::{ScoreLedger, TeamScore};
use crate::words::{UsedWords, WordPool};

/// A party game from team setup to final scores.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    pool: WordPool,
    rng: RngStreams,

    phase: GamePhase,
    team_count: usize,
    ledger: ScoreLedger,
    used: UsedWords,

    mode: Option<Mode>,
    round_number: u32,
    turns_this_round: usize,
    current_team: TeamId,
    round: Option<ActiveRound>,

    last_outcome: Option<TurnOutcome>,
    last_guess_correct: Option<bool>,
    notice: Option<Notice>,
}

impl Game {
    /// Create a game in the `Setup` phase from a validated configuration.
    ///
    /// Built only through [`GameBuilder`](super::GameBuilder).
    #[must_use]
    pub(crate) fn new(config: GameConfig, pool: WordPool, rng: RngStreams) -> Self {
        Self {
            config,
            pool,
            rng,
            phase: GamePhase::Setup,
            team_count: 0,
            ledger: ScoreLedger::default(),
            used: UsedWords::new(),
            mode: None,
            round_number: 1,
            turns_this_round: 0,
            current_team: TeamId::new(0),
            round: None,
            last_outcome: None,
            last_guess_correct: None,
            notice: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Mode being played, or about to start during its intro.
    #[must_use]
    pub fn current_mode(&self) -> Option<Mode> {
        self.mode
    }

    /// 1-based round within the current mode.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Team whose turn it is.
    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current_team
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    #[must_use]
    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live round, or the one that just ended during `RoundEnd`.
    #[must_use]
    pub fn round(&self) -> Option<&ActiveRound> {
        self.round.as_ref()
    }

    /// How the most recent turn ended.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Final standings, once the game is over.
    #[must_use]
    pub fn final_scores(&self) -> Option<Vec<TeamScore>> {
        (self.phase == GamePhase::GameOver).then(|| self.ledger.snapshot())
    }

    // === Host events ===

    /// Dispatch a host event.
    pub fn handle(&mut self, event: HostEvent) -> GameResult<()> {
        debug!(event = event.name(), phase = %self.phase, "host event");
        match event {
            HostEvent::TeamCountChosen(n) => self.choose_team_count(n),
            HostEvent::TeamNamesEntered(names) => self.enter_team_names(names),
            HostEvent::ContinuePressed => self.advance(),
            HostEvent::GuessSubmitted(text) => self.submit_guess(&text).map(|_| ()),
            HostEvent::TeamSelected(index) => self.select_team(index),
            HostEvent::Tick => {
                self.tick();
                Ok(())
            }
            HostEvent::PlayAgainPressed => self.play_again(),
        }
    }

    /// Set the number of teams. `Setup` only.
    pub fn choose_team_count(&mut self, count: usize) -> GameResult<()> {
        self.notice = None;
        self.expect_phase("team count", &[GamePhase::Setup])?;
        if count == 0 {
            return Err(GameError::NoTeams);
        }
        if count > self.config.max_teams {
            return Err(GameError::InvalidTeamCount {
                count,
                max: self.config.max_teams,
            });
        }

        self.team_count = count;
        self.phase = GamePhase::NameEntry;
        info!(teams = count, "team count chosen");
        Ok(())
    }

    /// Register team names and show the first mode's intro. `NameEntry` only.
    ///
    /// Blank and duplicate names are replaced with generated placeholders.
    pub fn enter_team_names(&mut self, names: Vec<String>) -> GameResult<()> {
        self.notice = None;
        self.expect_phase("team names", &[GamePhase::NameEntry])?;
        if self.team_count == 0 {
            return Err(GameError::NoTeams);
        }
        if names.len() != self.team_count {
            return Err(GameError::TeamNameCount {
                expected: self.team_count,
                actual: names.len(),
            });
        }

        let names = resolve_team_names(names, &mut self.rng.names);
        info!(?names, "teams registered");
        self.ledger = ScoreLedger::new(names);
        self.used.clear();
        self.enter_mode_intro(Mode::first());
        Ok(())
    }

    /// The continue button.
    ///
    /// - `ModeIntro`: start the mode with its first turn
    /// - `InRound` while paused: resume the round's clock
    /// - `RoundEnd`: start the next turn, or the next mode's intro
    pub fn advance(&mut self) -> GameResult<()> {
        self.notice = None;
        match self.phase {
            GamePhase::ModeIntro => self.start_turn(),
            GamePhase::InRound => {
                let paused = self.round.as_ref().is_some_and(RoundController::is_paused);
                if !paused {
                    return Err(self.reject("continue"));
                }
                if let Some(round) = self.round.as_mut() {
                    round.resume();
                }
                info!(team = %self.current_team, "round resumed");
                Ok(())
            }
            GamePhase::RoundEnd => {
                let Some(mode) = self.mode else {
                    return Err(self.reject("continue"));
                };
                if self.mode_complete(mode) {
                    match mode.next() {
                        Some(next) => {
                            self.enter_mode_intro(next);
                            Ok(())
                        }
                        None => {
                            self.finish_game();
                            Ok(())
                        }
                    }
                } else {
                    self.start_turn()
                }
            }
            _ => Err(self.reject("continue")),
        }
    }

    /// Process a guess from the current team. `InRound` only.
    ///
    /// Rejected guesses leave the round untouched and set an error notice.
    pub fn submit_guess(&mut self, text: &str) -> GameResult<GuessReport> {
        self.notice = None;
        if self.phase != GamePhase::InRound {
            return Err(self.reject("guess"));
        }
        let team = self.current_team;
        let Some(round) = self.round.as_mut() else {
            return Err(self.reject("guess"));
        };

        let mut ctx = RoundContext {
            config: &self.config,
            pool: &self.pool,
            used: &mut self.used,
            ledger: &mut self.ledger,
            rng: &mut self.rng,
            team,
        };
        let report = match round.submit_guess(text, &mut ctx) {
            Ok(report) => report,
            Err(err) => {
                warn!(%err, "guess rejected");
                if err.is_recoverable() {
                    self.notice = Some(Notice::error(err.to_string()));
                }
                return Err(err);
            }
        };

        self.last_guess_correct = Some(report.correct);
        if report.turn_over {
            self.end_turn();
        }
        Ok(report)
    }

    /// One second of game time. Ignored outside `InRound`.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::InRound {
            return;
        }
        let team = self.current_team;
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let mut ctx = RoundContext {
            config: &self.config,
            pool: &self.pool,
            used: &mut self.used,
            ledger: &mut self.ledger,
            rng: &mut self.rng,
            team,
        };
        round.tick(&mut ctx);

        if round.is_finished() {
            self.end_turn();
        }
    }

    /// Advance game time by `secs` seconds, one tick at a time.
    pub fn advance_secs(&mut self, secs: u32) {
        for _ in 0..secs {
            self.tick();
        }
    }

    /// Host override of whose turn it is.
    ///
    /// During a round this also pauses the round's clock until the next
    /// continue.
    pub fn select_team(&mut self, index: usize) -> GameResult<()> {
        self.notice = None;
        self.expect_phase(
            "team selection",
            &[GamePhase::ModeIntro, GamePhase::InRound, GamePhase::RoundEnd],
        )?;
        if index >= self.team_count {
            let err = GameError::TeamOutOfRange {
                index,
                count: self.team_count,
            };
            self.notice = Some(Notice::error(err.to_string()));
            return Err(err);
        }

        self.current_team = TeamId::new(index as u8);
        if self.phase == GamePhase::InRound {
            if let Some(round) = self.round.as_mut() {
                round.pause();
            }
        }
        let name = self.ledger.name(self.current_team).to_string();
        info!(team = %name, "host switched team");
        self.notice = Some(Notice::success(format!("Switched to {name}")));
        Ok(())
    }

    /// Start over with new teams. `GameOver` only.
    pub fn play_again(&mut self) -> GameResult<()> {
        self.notice = None;
        self.expect_phase("play again", &[GamePhase::GameOver])?;

        self.phase = GamePhase::Setup;
        self.team_count = 0;
        self.ledger = ScoreLedger::default();
        self.used.clear();
        self.mode = None;
        self.round_number = 1;
        self.turns_this_round = 0;
        self.current_team = TeamId::new(0);
        self.round = None;
        self.last_outcome = None;
        self.last_guess_correct = None;
        info!("game reset");
        Ok(())
    }

    // === Rendering ===

    /// Snapshot of everything the presentation layer shows.
    #[must_use]
    pub fn view(&self) -> GameView {
        let in_play = matches!(
            self.phase,
            GamePhase::ModeIntro | GamePhase::InRound | GamePhase::RoundEnd
        );
        let score_bar = self
            .ledger
            .snapshot()
            .into_iter()
            .map(|s| ScoreBarEntry {
                selected: in_play && s.team == self.current_team,
                team: s.team,
                name: s.name,
                score: s.score,
            })
            .collect();

        GameView {
            phase: self.phase,
            mode: self.mode,
            round_number: self.round_number,
            rounds_in_mode: self.mode.map_or(0, |m| self.config.rounds(m)),
            current_team: in_play.then_some(self.current_team),
            score_bar,
            intro: match (self.phase, self.mode) {
                (GamePhase::ModeIntro, Some(mode)) => Some(ModeIntro::for_mode(mode, &self.config)),
                _ => None,
            },
            round: match self.phase {
                GamePhase::InRound | GamePhase::RoundEnd => {
                    self.round.as_ref().map(RoundController::view)
                }
                _ => None,
            },
            paused: self.round.as_ref().is_some_and(RoundController::is_paused),
            last_guess_correct: self.last_guess_correct,
            last_outcome: self.last_outcome.clone(),
            notice: self.notice.clone(),
            final_scores: self.final_scores(),
        }
    }

    // === Internal transitions ===

    fn enter_mode_intro(&mut self, mode: Mode) {
        self.mode = Some(mode);
        self.round_number = 1;
        self.turns_this_round = 0;
        self.current_team = TeamId::new(0);
        self.round = None;
        self.phase = GamePhase::ModeIntro;
        info!(%mode, "mode intro");
    }

    /// Set up a fresh round for the current team.
    ///
    /// On failure the phase is left unchanged.
    fn start_turn(&mut self) -> GameResult<()> {
        let Some(mode) = self.mode else {
            return Err(self.reject("continue"));
        };
        if self.team_count == 0 {
            return Err(GameError::NoTeams);
        }

        let mut ctx = RoundContext {
            config: &self.config,
            pool: &self.pool,
            used: &mut self.used,
            ledger: &mut self.ledger,
            rng: &mut self.rng,
            team: self.current_team,
        };
        let round = ActiveRound::setup(mode, &mut ctx).map_err(|err| {
            warn!(%err, %mode, "round setup failed");
            err
        })?;

        self.round = Some(round);
        self.last_guess_correct = None;
        self.phase = GamePhase::InRound;
        info!(
            %mode,
            round = self.round_number,
            team = %self.ledger.name(self.current_team),
            "turn started"
        );
        Ok(())
    }

    /// Close the finished turn and move the turn pointer on.
    fn end_turn(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if let Some(timers) = round.timers_mut() {
            timers.cancel_all();
            timers.resume();
        }
        self.last_outcome = round.outcome().cloned();
        let mode = round.mode();
        info!(
            %mode,
            team = %self.ledger.name(self.current_team),
            outcome = ?self.last_outcome,
            "turn over"
        );

        self.turns_this_round += 1;
        self.current_team = self.current_team.next(self.team_count);
        if self.turns_this_round >= self.team_count {
            self.turns_this_round = 0;
            self.round_number += 1;
        }

        if self.mode_complete(mode) && mode.next().is_none() {
            self.finish_game();
        } else {
            self.phase = GamePhase::RoundEnd;
        }
    }

    fn mode_complete(&self, mode: Mode) -> bool {
        self.round_number > self.config.rounds(mode)
    }

    fn finish_game(&mut self) {
        self.ledger.finalize();
        self.phase = GamePhase::GameOver;
        let winners: Vec<&str> = self
            .ledger
            .leaders()
            .into_iter()
            .map(|t| self.ledger.name(t))
            .collect();
        info!(?winners, "game over");
    }

    fn expect_phase(&mut self, event: &'static str, allowed: &[GamePhase]) -> GameResult<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(self.reject(event))
        }
    }

    fn reject(&mut self, event: &'static str) -> GameError {
        let err = GameError::UnexpectedEvent {
            event,
            phase: self.phase,
        };
        warn!(%err, "event rejected");
        self.notice = Some(Notice::error(err.to_string()));
        err
    }
}

/// Trim names and replace blank or duplicate ones with unique placeholders.
fn resolve_team_names(names: Vec<String>, rng: &mut GameRng) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::with_capacity(names.len());
    let taken = |candidate: &str, resolved: &[String], raw: &[String]| {
        let key = candidate.to_lowercase();
        resolved.iter().any(|n| n.to_lowercase() == key)
            || raw.iter().any(|n| n.trim().to_lowercase() == key)
    };

    for (i, name) in names.iter().enumerate() {
        let name = name.trim();
        if !name.is_empty() && !taken(name, &resolved, &[]) {
            resolved.push(name.to_string());
            continue;
        }
        let later = &names[i + 1..];
        let placeholder = loop {
            let candidate = format!("Team {}", rng.base36(3));
            if !taken(&candidate, &resolved, later) {
                break candidate;
            }
        };
        debug!(original = %name, %placeholder, "placeholder team name");
        resolved.push(placeholder);
    }
    resolved
}
