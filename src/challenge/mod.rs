//! Challenge phase: countdown timer and round resolution.
//!
//! The settled auction winner races the countdown to produce at least
//! `current_bid` correct answers. Resolution decides who is credited and
//! how many points they receive.

mod countdown;
mod resolution;

pub use countdown::Countdown;
pub use resolution::{resolve_round, RoundOutcome};
