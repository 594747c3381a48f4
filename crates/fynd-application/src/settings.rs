//! Theme preference and the double-back exit guard.

use fynd_core::config::ExitGuardSettings;
use fynd_core::error::Result;
use fynd_core::navigation::{BackAction, ExitGuard};
use fynd_infrastructure::ThemePreference;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

pub struct SettingsUseCase {
    theme: Arc<ThemePreference>,
    exit_guard: Mutex<ExitGuard>,
}

impl SettingsUseCase {
    pub fn new(theme: Arc<ThemePreference>, exit_guard: &ExitGuardSettings) -> Self {
        Self {
            theme,
            exit_guard: Mutex::new(ExitGuard::new(Duration::from_millis(exit_guard.window_ms))),
        }
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn set_dark_theme(&self, dark: bool) -> Result<()> {
        self.theme.set_dark(dark)?;
        tracing::debug!(dark, "Theme updated");
        Ok(())
    }

    pub fn toggle_theme(&self) -> Result<bool> {
        self.theme.toggle()
    }

    pub fn on_back_pressed(&self) -> BackAction {
        self.on_back_pressed_at(Instant::now())
    }

    pub fn on_back_pressed_at(&self, now: Instant) -> BackAction {
        self.exit_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_back_pressed(now)
    }
}
