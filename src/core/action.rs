//! Engine operations as data.
//!
//! Each variant maps to one operation the presentation layer (or the
//! countdown ticker) can issue. `GameEngine::apply` validates the action
//! against the current state before mutating anything.

use serde::{Deserialize, Serialize};

use super::config::CategoryId;
use super::team::{PowerUp, TeamId};

/// A state-mutating engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Name the teams and open the draft. Blank names fall back to defaults.
    Start { names: [String; 2] },

    /// Draft a category for the active team.
    PickCategory(CategoryId),

    /// Arm or disarm a power-up for the active team.
    TogglePowerUp(PowerUp),

    /// Open an auction on a board cell.
    InitiateAuction {
        category: CategoryId,
        points: u32,
        team: TeamId,
    },

    RaiseBid,

    /// The current leader concedes to the other team.
    Withdraw,

    StartChallenge,

    /// Count (or uncount) correct answers while the countdown runs.
    AdjustChallengeScore(i32),

    /// Start/resume (`true`) or pause (`false`) the countdown.
    SetCountdownActive(bool),

    /// One second elapsed.
    Tick,

    FinalizeChallenge,

    /// Out-of-band score correction.
    AdjustTeamScore { team: TeamId, delta: i64 },

    Reset,
}

impl Action {
    /// Build a start action from borrowed names.
    #[must_use]
    pub fn start(first: &str, second: &str) -> Self {
        Action::Start {
            names: [first.to_string(), second.to_string()],
        }
    }

    /// Short operation name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start { .. } => "start",
            Action::PickCategory(_) => "pick_category",
            Action::TogglePowerUp(_) => "toggle_power_up",
            Action::InitiateAuction { .. } => "initiate_auction",
            Action::RaiseBid => "raise_bid",
            Action::Withdraw => "withdraw",
            Action::StartChallenge => "start_challenge",
            Action::AdjustChallengeScore(_) => "adjust_challenge_score",
            Action::SetCountdownActive(_) => "set_countdown_active",
            Action::Tick => "tick",
            Action::FinalizeChallenge => "finalize_challenge",
            Action::AdjustTeamScore { .. } => "adjust_team_score",
            Action::Reset => "reset",
        }
    }
}
