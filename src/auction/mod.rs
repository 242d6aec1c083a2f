//! Auction mini-phase.
//!
//! Decides which team attempts a challenge and how many answers it owes:
//!
//! - The initiator leads at the opening bid.
//! - Each raise adds one to the bid and hands the lead to the other team.
//! - A withdrawal by the leader settles the auction for the other team.
//! - A block power-up settles the auction for the initiator up front and
//!   closes bidding entirely.

mod bidding;

pub use bidding::AuctionState;
