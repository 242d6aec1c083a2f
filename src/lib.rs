//! # trivia-auction
//!
//! Rules engine for a two-team trivia auction party game.
//!
//! Teams draft categories, auction board cells for the right to answer,
//! race a countdown to meet their bid, and accumulate points toward a
//! final winner.
//!
//! ## Design Principles
//!
//! 1. **Flat reducer**: One state record, one engine, one validated
//!    `apply(action)` entry point. Named operations wrap it.
//!
//! 2. **Guards, not errors**: Out-of-guard calls are dropped as no-ops.
//!    `apply` still reports why, for callers that care.
//!
//! 3. **Cheap snapshots**: Board collections use `im` persistent
//!    structures, so the rendering layer can hold a snapshot per frame.
//!
//! ## Modules
//!
//! - `core`: Teams, configuration, state, actions, rejections
//! - `auction`: Bidding arithmetic and the auction record
//! - `challenge`: Countdown timer and round resolution
//! - `rules`: The `GameEngine` phase state machine
//! - `ticker`: Cancellable once-per-second countdown driver

pub mod core;
pub mod auction;
pub mod challenge;
pub mod rules;
pub mod ticker;

// Re-export commonly used types
pub use crate::core::{
    Action, Category, CategoryId, CellKey, GameConfig, GameState, Inventory, Phase, PowerUp,
    Rejection, SelectedCategory, Team, TeamId, TeamPair,
};

pub use crate::auction::AuctionState;

pub use crate::challenge::{resolve_round, Countdown, RoundOutcome};

pub use crate::rules::{GameEngine, GameResult};

pub use crate::ticker::{CountdownTicker, SharedEngine};
