// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

/// Percentage shown while a run is "processing". Always within `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ProgressState(u8);

impl ProgressState {
    pub const START: ProgressState = ProgressState(0);
    pub const COMPLETE: ProgressState = ProgressState(100);

    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Next state after one tick; saturates at 100.
    pub fn advance(self, step: u8) -> Self {
        Self(self.0.saturating_add(step).min(100))
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }
}

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_saturates() {
        let state = ProgressState::new(95).advance(10);
        assert_eq!(state, ProgressState::COMPLETE);
        assert!(state.is_complete());
        assert_eq!(ProgressState::new(250).percent(), 100);
        assert_eq!(ProgressState::new(250).advance(255).percent(), 100);
    }

    #[test]
    fn display_as_percent() {
        assert_eq!(ProgressState::new(40).to_string(), "40%");
    }
}
