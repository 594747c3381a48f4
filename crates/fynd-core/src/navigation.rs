//! Screen routes and the double-back-to-exit guard.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    /// One-time completion of name, date of birth and gender.
    SelectGender,
    Home,
}

/// What a back press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Show "Press back again to exit" and wait for a second press.
    ShowExitHint,
    Exit,
}

/// Requires two back presses within a window to leave the app.
#[derive(Debug, Clone)]
pub struct ExitGuard {
    window: Duration,
    armed_at: Option<Instant>,
}

impl ExitGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed_at: None,
        }
    }

    pub fn on_back_pressed(&mut self, now: Instant) -> BackAction {
        match self.armed_at {
            Some(armed) if now.saturating_duration_since(armed) < self.window => {
                self.armed_at = None;
                BackAction::Exit
            }
            _ => {
                self.armed_at = Some(now);
                BackAction::ShowExitHint
            }
        }
    }
}
