//! Score ledger: one integer score per registered team.
//!
//! Scores start at 0, are never reset mid-game and have no floor: wrong
//! riddle answers and failed timed words can push a team below zero.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{TeamId, TeamMap};

/// One row of a score snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team: TeamId,
    pub name: String,
    pub score: i64,
}

/// Team scores for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    names: TeamMap<String>,
    scores: TeamMap<i64>,
    is_final: bool,
}

impl ScoreLedger {
    /// Create a ledger with a zero entry for every team, in registration order.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        let scores = TeamMap::with_value(names.len(), 0);
        Self {
            names: TeamMap::from_vec(names),
            scores,
            is_final: false,
        }
    }

    /// Number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.scores.team_count()
    }

    /// A team's display name.
    #[must_use]
    pub fn name(&self, team: TeamId) -> &str {
        &self.names[team]
    }

    /// A team's current score.
    #[must_use]
    pub fn score(&self, team: TeamId) -> i64 {
        self.scores[team]
    }

    /// Add `delta` (possibly negative) to a team's score and return the new total.
    ///
    /// A finalised ledger is read-only; the call is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `team` is not registered in this ledger.
    pub fn award(&mut self, team: TeamId, delta: i64) -> i64 {
        if self.is_final {
            warn!(%team, delta, "ignoring award on final ledger");
            return self.scores[team];
        }
        let score = &mut self.scores[team];
        *score += delta;
        debug!(team = %self.names[team], delta, total = *score, "score changed");
        *score
    }

    /// Freeze the ledger at game over.
    pub fn finalize(&mut self) {
        self.is_final = true;
    }

    /// Whether the ledger has been frozen.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Scores in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TeamScore> {
        self.names
            .iter()
            .map(|(team, name)| TeamScore {
                team,
                name: name.clone(),
                score: self.scores[team],
            })
            .collect()
    }

    /// Teams sharing the highest score. Empty for an empty ledger.
    #[must_use]
    pub fn leaders(&self) -> Vec<TeamId> {
        let Some(best) = self.scores.values().max().copied() else {
            return Vec::new();
        };
        self.scores
            .iter()
            .filter(|(_, &score)| score == best)
            .map(|(team, _)| team)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> ScoreLedger {
        ScoreLedger::new(vec!["Owls".into(), "Foxes".into(), "Bees".into()])
    }

    #[test]
    fn test_starts_at_zero() {
        let ledger = ledger();
        assert_eq!(ledger.team_count(), 3);
        for team in TeamId::all(3) {
            assert_eq!(ledger.score(team), 0);
        }
    }

    #[test]
    fn test_award_sums_without_floor() {
        let mut ledger = ledger();
        let owls = TeamId::new(0);

        ledger.award(owls, 50);
        ledger.award(owls, -25);
        ledger.award(owls, -50);
        assert_eq!(ledger.score(owls), -25);
    }

    #[test]
    fn test_snapshot_order() {
        let mut ledger = ledger();
        ledger.award(TeamId::new(2), 100);

        let snapshot = ledger.snapshot();
        let names: Vec<_> = snapshot.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Owls", "Foxes", "Bees"]);
        assert_eq!(snapshot[2].score, 100);
        assert_eq!(snapshot[2].team, TeamId::new(2));
    }

    #[test]
    fn test_final_ledger_is_read_only() {
        let mut ledger = ledger();
        ledger.award(TeamId::new(0), 10);
        ledger.finalize();

        assert_eq!(ledger.award(TeamId::new(0), 40), 10);
        assert_eq!(ledger.score(TeamId::new(0)), 10);
        assert!(ledger.is_final());
    }

    #[test]
    fn test_leaders_with_tie() {
        let mut ledger = ledger();
        ledger.award(TeamId::new(0), 150);
        ledger.award(TeamId::new(2), 150);
        ledger.award(TeamId::new(1), -25);

        assert_eq!(ledger.leaders(), vec![TeamId::new(0), TeamId::new(2)]);
        assert!(ScoreLedger::default().leaders().is_empty());
    }
}
