//! Core engine types: teams, configuration, state, actions, rejections.
//!
//! Everything the auction, challenge, and rules modules build on.

pub mod team;
pub mod config;
pub mod state;
pub mod action;
pub mod error;

pub use team::{Inventory, PowerUp, Team, TeamId, TeamPair, TEAM_COUNT};
pub use config::{Category, CategoryId, GameConfig};
pub use state::{CellKey, GameState, Phase, SelectedCategory};
pub use action::Action;
pub use error::Rejection;
