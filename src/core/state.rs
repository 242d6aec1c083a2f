//! Game state: the read-only snapshot handed to the rendering layer.
//!
//! ## Phase
//!
//! SETUP → DRAFT → BOARD ⇄ AUCTION → CHALLENGE → BOARD ... → FINALE.
//! Transitions only move forward; a reset returns to SETUP.
//!
//! ## GameState
//!
//! Every piece of ephemeral game data lives here. Collections use `im`
//! persistent structures so a snapshot is an O(1) clone.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::{CategoryId, Category, GameConfig};
use super::team::{Team, TeamId, TeamPair};
use super::PowerUp;
use crate::auction::AuctionState;
use crate::challenge::{Countdown, RoundOutcome};

/// Game phase. Governs which operations are valid and which view renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Draft,
    Board,
    Auction,
    Challenge,
    Finale,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "SETUP",
            Phase::Draft => "DRAFT",
            Phase::Board => "BOARD",
            Phase::Auction => "AUCTION",
            Phase::Challenge => "CHALLENGE",
            Phase::Finale => "FINALE",
        };
        f.write_str(name)
    }
}

/// A drafted category and the team that claimed it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedCategory {
    pub category: Category,
    pub owner: TeamId,
}

/// One cell of the scoring board: category × lane × point tier.
///
/// Once recorded as answered, a cell can never be auctioned again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub category: CategoryId,
    pub lane: TeamId,
    pub points: u32,
}

impl CellKey {
    #[must_use]
    pub const fn new(category: CategoryId, lane: TeamId, points: u32) -> Self {
        Self {
            category,
            lane,
            points,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,

    pub teams: TeamPair<Team>,

    /// Team whose turn it is (drafting, arming, opening an auction).
    pub active_team: TeamId,

    /// Draft picks in order.
    pub selected: Vector<SelectedCategory>,

    pub answered: ImHashSet<CellKey>,

    /// Power-up armed by the active team for its next auction.
    pub armed: Option<PowerUp>,

    /// Present only between auction initiation and finalization.
    pub auction: Option<AuctionState>,

    /// Correct answers in the running challenge.
    pub challenge_score: u32,

    pub countdown: Countdown,

    /// Result of the most recently finalized round.
    pub last_outcome: Option<RoundOutcome>,
}

impl GameState {
    /// Create the initial SETUP state.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Setup,
            teams: TeamPair::new(|_| Team::new(config.starting_inventory())),
            active_team: TeamId::FIRST,
            selected: Vector::new(),
            answered: ImHashSet::new(),
            armed: None,
            auction: None,
            challenge_score: 0,
            countdown: Countdown::default(),
            last_outcome: None,
        }
    }

    /// Check if a category has already been drafted.
    #[must_use]
    pub fn is_selected(&self, category: CategoryId) -> bool {
        self.selected.iter().any(|s| s.category.id == category)
    }

    /// Get the draft pick for a category.
    #[must_use]
    pub fn selection(&self, category: CategoryId) -> Option<&SelectedCategory> {
        self.selected.iter().find(|s| s.category.id == category)
    }

    /// Check if a board cell has been played.
    #[must_use]
    pub fn is_answered(&self, cell: &CellKey) -> bool {
        self.answered.contains(cell)
    }

    /// Number of board cells played.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    /// Get a team.
    #[must_use]
    pub fn team(&self, team: TeamId) -> &Team {
        &self.teams[team]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Inventory;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.active_team, TeamId::FIRST);
        for (_, team) in state.teams.iter() {
            assert_eq!(team.score, 0);
            assert_eq!(team.inventory, Inventory::new(1, 1));
            assert!(team.name.is_empty());
        }
        assert!(state.selected.is_empty());
        assert_eq!(state.answered_count(), 0);
        assert!(state.auction.is_none());
        assert!(!state.countdown.active);
    }

    #[test]
    fn test_selection_lookup() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let football = config.categories()[1].clone();

        state.selected.push_back(SelectedCategory {
            category: football,
            owner: TeamId::SECOND,
        });

        assert!(state.is_selected(CategoryId::new(1)));
        assert!(!state.is_selected(CategoryId::new(2)));
        assert_eq!(state.selection(CategoryId::new(1)).map(|s| s.owner), Some(TeamId::SECOND));
    }

    #[test]
    fn test_answered_cells_are_lane_specific() {
        let mut state = GameState::new(&GameConfig::default());
        let cell = CellKey::new(CategoryId::new(3), TeamId::FIRST, 200);
        state.answered.insert(cell);

        assert!(state.is_answered(&cell));
        assert!(!state.is_answered(&CellKey::new(CategoryId::new(3), TeamId::SECOND, 200)));
        assert!(!state.is_answered(&CellKey::new(CategoryId::new(3), TeamId::FIRST, 300)));
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut state = GameState::new(&GameConfig::default());
        let snapshot = state.clone();

        state.answered.insert(CellKey::new(CategoryId::new(0), TeamId::FIRST, 100));
        state.teams[TeamId::FIRST].score = 300;

        assert_eq!(snapshot.answered_count(), 0);
        assert_eq!(snapshot.team(TeamId::FIRST).score, 0);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(format!("{}", Phase::Challenge), "CHALLENGE");
        assert_eq!(Phase::default(), Phase::Setup);
    }
}
