//! Challenge countdown.
//!
//! The countdown is seeded when a challenge starts but does not run until
//! the presentation layer starts it. `active` gates ticking; `started`
//! separates "not yet begun" from "paused".

use serde::{Deserialize, Serialize};

use crate::core::error::{Rejection, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown {
    pub seconds_remaining: u32,
    pub active: bool,
    pub started: bool,
}

impl Countdown {
    /// A fresh, not-yet-started countdown.
    #[must_use]
    pub const fn seeded(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds,
            active: false,
            started: false,
        }
    }

    /// Check if the countdown is paused after having run.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.started && !self.active
    }

    /// Start or resume. Requires seconds left.
    pub fn resume(&mut self) -> Result<()> {
        if self.seconds_remaining == 0 {
            return Err(Rejection::CountdownExhausted);
        }
        self.active = true;
        self.started = true;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        if !self.active {
            return Err(Rejection::CountdownInactive);
        }
        self.active = false;
        Ok(())
    }

    /// Consume one second. Reaching zero deactivates the countdown.
    pub fn tick(&mut self) -> Result<()> {
        if !self.active {
            return Err(Rejection::CountdownInactive);
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.active = false;
        }
        Ok(())
    }

    /// Stop the countdown for good (round over or engine reset).
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
