//! Auction record and bidding arithmetic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{Rejection, Result};
use crate::core::{Category, PowerUp, TeamId};

/// Transient auction for one board cell.
///
/// Created at initiation, destroyed once the challenge is finalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionState {
    pub category: Category,

    /// Base point value of the cell.
    pub base_points: u32,

    /// Answers the winner must produce. Starts at the opening bid.
    pub current_bid: u32,

    /// Team currently holding the bid.
    pub leader: TeamId,

    /// Leader before the most recent raise.
    pub last_bidder: Option<TeamId>,

    pub withdrawn: SmallVec<[TeamId; 2]>,

    /// Team that will attempt the challenge, once known.
    pub winner: Option<TeamId>,

    pub mission: String,

    pub is_doubled: bool,
    pub is_blocked: bool,

    /// Team that spent the power-up on this auction.
    pub power_up_owner: Option<TeamId>,

    /// Team that drafted the category.
    pub category_owner: TeamId,

    /// Team that opened the auction.
    pub initiator: TeamId,
}

impl AuctionState {
    /// Open an auction led by `initiator`.
    ///
    /// A block power-up pre-settles the auction: the initiator wins
    /// outright and bidding is closed.
    #[must_use]
    pub fn open(
        category: Category,
        base_points: u32,
        opening_bid: u32,
        initiator: TeamId,
        category_owner: TeamId,
        power_up: Option<PowerUp>,
        mission: String,
    ) -> Self {
        let is_doubled = power_up == Some(PowerUp::Double);
        let is_blocked = power_up == Some(PowerUp::Block);

        Self {
            category,
            base_points,
            current_bid: opening_bid,
            leader: initiator,
            last_bidder: None,
            withdrawn: SmallVec::new(),
            winner: is_blocked.then_some(initiator),
            mission,
            is_doubled,
            is_blocked,
            power_up_owner: power_up.map(|_| initiator),
            category_owner,
            initiator,
        }
    }

    /// Check if a winner is known.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.winner.is_some()
    }

    /// Check whether bidding controls apply to this auction.
    pub fn check_open(&self) -> Result<()> {
        if self.is_blocked {
            return Err(Rejection::AuctionBlocked);
        }
        Ok(())
    }

    /// Raise the bid by one and hand the lead to the other team.
    pub fn raise_bid(&mut self) -> Result<()> {
        self.check_open()?;
        self.last_bidder = Some(self.leader);
        self.leader = self.leader.other();
        self.current_bid = self.current_bid.saturating_add(1);
        Ok(())
    }

    /// The current leader concedes; the other team wins at the standing bid.
    ///
    /// Returns the settled winner.
    pub fn withdraw(&mut self) -> Result<TeamId> {
        self.check_open()?;
        let withdrawing = self.leader;
        if !self.withdrawn.contains(&withdrawing) {
            self.withdrawn.push(withdrawing);
        }
        let winner = withdrawing.other();
        self.winner = Some(winner);
        Ok(winner)
    }

    /// Check if a team has conceded.
    #[must_use]
    pub fn has_withdrawn(&self, team: TeamId) -> bool {
        self.withdrawn.contains(&team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CategoryId;

    fn open(power_up: Option<PowerUp>) -> AuctionState {
        AuctionState::open(
            Category::new(CategoryId::new(4), "Capitals"),
            200,
            1,
            TeamId::FIRST,
            TeamId::SECOND,
            power_up,
            "Name capitals".to_string(),
        )
    }

    #[test]
    fn test_open_plain() {
        let auction = open(None);

        assert_eq!(auction.current_bid, 1);
        assert_eq!(auction.leader, TeamId::FIRST);
        assert_eq!(auction.last_bidder, None);
        assert!(!auction.is_settled());
        assert!(!auction.is_doubled);
        assert!(!auction.is_blocked);
        assert_eq!(auction.power_up_owner, None);
        assert_eq!(auction.category_owner, TeamId::SECOND);
    }

    #[test]
    fn test_open_blocked_presettles() {
        let auction = open(Some(PowerUp::Block));

        assert!(auction.is_blocked);
        assert_eq!(auction.winner, Some(TeamId::FIRST));
        assert_eq!(auction.power_up_owner, Some(TeamId::FIRST));
    }

    #[test]
    fn test_open_doubled() {
        let auction = open(Some(PowerUp::Double));

        assert!(auction.is_doubled);
        assert!(!auction.is_settled());
        assert_eq!(auction.power_up_owner, Some(TeamId::FIRST));
    }

    #[test]
    fn test_raise_swaps_leader() {
        let mut auction = open(None);

        auction.raise_bid().unwrap();
        assert_eq!(auction.current_bid, 2);
        assert_eq!(auction.leader, TeamId::SECOND);
        assert_eq!(auction.last_bidder, Some(TeamId::FIRST));

        auction.raise_bid().unwrap();
        assert_eq!(auction.current_bid, 3);
        assert_eq!(auction.leader, TeamId::FIRST);
        assert_eq!(auction.last_bidder, Some(TeamId::SECOND));
    }

    #[test]
    fn test_raise_saturates_at_max_bid() {
        let mut auction = open(None);
        auction.current_bid = u32::MAX;

        auction.raise_bid().unwrap();
        assert_eq!(auction.current_bid, u32::MAX);
        assert_eq!(auction.leader, TeamId::SECOND);
    }

    #[test]
    fn test_withdraw_settles_other_team() {
        let mut auction = open(None);
        auction.raise_bid().unwrap();

        let winner = auction.withdraw().unwrap();
        assert_eq!(winner, TeamId::FIRST);
        assert_eq!(auction.winner, Some(TeamId::FIRST));
        assert!(auction.has_withdrawn(TeamId::SECOND));
        assert_eq!(auction.current_bid, 2);

        // A repeated concession changes nothing.
        assert_eq!(auction.withdraw().unwrap(), TeamId::FIRST);
        assert_eq!(auction.withdrawn.len(), 1);
    }

    #[test]
    fn test_blocked_rejects_bidding() {
        let mut auction = open(Some(PowerUp::Block));

        assert_eq!(auction.raise_bid(), Err(Rejection::AuctionBlocked));
        assert_eq!(auction.withdraw(), Err(Rejection::AuctionBlocked));
        assert_eq!(auction.current_bid, 1);
        assert_eq!(auction.winner, Some(TeamId::FIRST));
        assert!(auction.withdrawn.is_empty());
    }
}
