//! Guard failures.
//!
//! Every rejected operation maps to one `Rejection`. The engine never
//! panics on an out-of-guard call; the named operations log and drop
//! these, while `GameEngine::apply` hands them back to the caller.

use thiserror::Error;

use super::config::CategoryId;
use super::state::{CellKey, Phase};
use super::team::{PowerUp, TeamId};

pub type Result<T> = std::result::Result<T, Rejection>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("operation requires {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),

    #[error("category already drafted: {0}")]
    CategoryTaken(CategoryId),

    #[error("category was not drafted: {0}")]
    CategoryNotDrafted(CategoryId),

    #[error("draft is already complete")]
    DraftComplete,

    #[error("{team} is not the active team ({active} is)")]
    NotActiveTeam { team: TeamId, active: TeamId },

    #[error("{team} holds no {kind} power-up")]
    PowerUpUnavailable { team: TeamId, kind: PowerUp },

    #[error("not a board point value: {0}")]
    UnknownPointValue(u32),

    #[error("cell already answered: {0:?}")]
    CellAnswered(CellKey),

    #[error("no auction in progress")]
    NoAuction,

    #[error("auction is block-settled")]
    AuctionBlocked,

    #[error("auction has no settled winner")]
    WinnerNotSettled,

    #[error("countdown is not running")]
    CountdownInactive,

    #[error("countdown has no seconds left")]
    CountdownExhausted,

    #[error("challenge score already meets the bid")]
    BidReached,
}

impl Rejection {
    pub(crate) fn wrong_phase(expected: Phase, actual: Phase) -> Self {
        Self::WrongPhase { expected, actual }
    }
}
