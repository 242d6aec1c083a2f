//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team identifier. The game always has exactly two teams,
//! so a `TeamId` can only ever be `TeamId::FIRST` or `TeamId::SECOND`.
//!
//! ## TeamPair
//!
//! Per-team storage backed by a fixed `[T; 2]` array, indexed by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of teams in a game.
pub const TEAM_COUNT: usize = 2;

/// Team identifier. Indices are 0-based: the first team is `TeamId::FIRST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(u8);

impl TeamId {
    /// The team that drafts first and opens the board.
    pub const FIRST: TeamId = TeamId(0);
    /// The other team.
    pub const SECOND: TeamId = TeamId(1);

    /// Build a team ID from a raw index, if it names one of the two teams.
    ///
    /// ```
    /// use trivia_auction::core::TeamId;
    ///
    /// assert_eq!(TeamId::from_index(1), Some(TeamId::SECOND));
    /// assert_eq!(TeamId::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::FIRST),
            1 => Some(Self::SECOND),
            _ => None,
        }
    }

    /// Get the raw team index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        TeamId(1 - self.0)
    }

    /// Iterate over both team IDs in order.
    pub fn all() -> impl Iterator<Item = TeamId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0 + 1)
    }
}

/// Per-team data storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPair<T> {
    data: [T; TEAM_COUNT],
}

impl<T> TeamPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(TeamId) -> T) -> Self {
        Self {
            data: [factory(TeamId::FIRST), factory(TeamId::SECOND)],
        }
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        TeamId::all().zip(self.data.iter())
    }
}

impl<T> Index<TeamId> for TeamPair<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamPair<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

/// Limited-use round modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUp {
    /// Doubles the round reward for its owner on success.
    Double,
    /// Pre-settles the auction to the activating team.
    Block,
}

impl std::fmt::Display for PowerUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerUp::Double => f.write_str("double"),
            PowerUp::Block => f.write_str("block"),
        }
    }
}

/// Remaining power-up units held by a team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    pub double: u32,
    pub block: u32,
}

impl Inventory {
    /// Create an inventory with the given unit counts.
    #[must_use]
    pub const fn new(double: u32, block: u32) -> Self {
        Self { double, block }
    }

    /// Units held of a power-up.
    #[must_use]
    pub const fn count(&self, kind: PowerUp) -> u32 {
        match kind {
            PowerUp::Double => self.double,
            PowerUp::Block => self.block,
        }
    }

    /// Check if at least one unit of a power-up is held.
    #[must_use]
    pub const fn has(&self, kind: PowerUp) -> bool {
        self.count(kind) > 0
    }

    /// Spend one unit. Returns false if none were held.
    pub fn consume(&mut self, kind: PowerUp) -> bool {
        let slot = match kind {
            PowerUp::Double => &mut self.double,
            PowerUp::Block => &mut self.block,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// A competing team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Never negative; see [`Team::adjust_score`].
    pub score: u32,
    pub inventory: Inventory,
}

impl Team {
    /// Create an unnamed team with zero score.
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            name: String::new(),
            score: 0,
            inventory,
        }
    }

    /// Apply a signed delta to the score, clamped at zero.
    pub fn adjust_score(&mut self, delta: i64) {
        let next = (i64::from(self.score) + delta).clamp(0, i64::from(u32::MAX));
        self.score = next as u32;
    }
}
