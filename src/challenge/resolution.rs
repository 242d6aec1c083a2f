//! Round resolution arithmetic.

use serde::{Deserialize, Serialize};

use crate::auction::AuctionState;
use crate::core::TeamId;

/// What a finalized round produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Whether the challenger met the bid.
    pub success: bool,
    /// Team credited with the points.
    pub winner: TeamId,
    pub points: u32,
}

/// Resolve a settled auction against the challenge score.
///
/// The settled winner keeps the round only if it met the bid; otherwise
/// the other team takes the base points. Doubling applies only on success
/// and only when the credited team spent the double.
///
/// Returns `None` if the auction has no settled winner.
#[must_use]
pub fn resolve_round(auction: &AuctionState, challenge_score: u32) -> Option<RoundOutcome> {
    let settled = auction.winner?;
    let success = challenge_score >= auction.current_bid;
    let winner = if success { settled } else { settled.other() };

    let doubled = success && auction.is_doubled && auction.power_up_owner == Some(winner);
    let points = if doubled {
        auction.base_points.saturating_mul(2)
    } else {
        auction.base_points
    };

    Some(RoundOutcome {
        success,
        winner,
        points,
    })
}
