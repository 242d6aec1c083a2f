//! Phase state machine.
//!
//! `GameEngine` owns the configuration and the state record and exposes
//! the full operation set:
//! - Validation of every action against its guards
//! - Atomic application of accepted actions
//! - Read-only snapshots for the rendering layer
//! - Final standings once the board is played out

pub mod engine;

pub use engine::{GameEngine, GameResult};
