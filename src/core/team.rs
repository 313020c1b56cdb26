//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team identifier. Teams are indexed in registration order,
//! which is also the round-robin turn order.
//!
//! ## TeamMap
//!
//! Per-team data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Team identifier.
///
/// Team indices are 0-based: the first registered team is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The team that plays after this one in a game of `team_count` teams.
    ///
    /// ```
    /// use word_party::core::TeamId;
    ///
    /// assert_eq!(TeamId::new(0).next(3), TeamId::new(1));
    /// assert_eq!(TeamId::new(2).next(3), TeamId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, team_count: usize) -> Self {
        Self(((self.index() + 1) % team_count) as u8)
    }

    /// Iterate over all team IDs for a game with `team_count` teams.
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team #{}", self.0)
    }
}

/// Per-team data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per team, in registration order.
///
/// ## Example
///
/// ```
/// use word_party::core::{TeamId, TeamMap};
///
/// let mut scores: TeamMap<i64> = TeamMap::with_value(3, 0);
/// scores[TeamId::new(1)] += 50;
/// assert_eq!(scores[TeamId::new(1)], 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: Vec<T>,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(team_count: usize, factory: impl Fn(TeamId) -> T) -> Self {
        assert!(team_count <= 255, "At most 255 teams supported");

        let data = (0..team_count as u8).map(|i| factory(TeamId(i))).collect();

        Self { data }
    }

    /// Create a new TeamMap with all entries set to the same value.
    pub fn with_value(team_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(team_count, |_| value.clone())
    }

    /// Build a map from an already ordered list of values.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(data.len() <= 255, "At most 255 teams supported");
        Self { data }
    }

    /// Get the number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether no teams are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a team's entry, or `None` if the ID is out of range.
    #[must_use]
    pub fn get(&self, team: TeamId) -> Option<&T> {
        self.data.get(team.index())
    }

    /// Get a mutable reference to a team's entry.
    pub fn get_mut(&mut self, team: TeamId) -> Option<&mut T> {
        self.data.get_mut(team.index())
    }

    /// Iterate over (TeamId, &T) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }

    /// Iterate over the values in registration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all team IDs.
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        (0..self.data.len() as u8).map(TeamId)
    }
}

impl<T> Default for TeamMap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        &self.data[team.index()]
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        &mut self.data[team.index()]
    }
}
