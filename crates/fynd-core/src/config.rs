//! Application configuration model.
//!
//! Every section falls back to its defaults when absent, so an empty
//! `config.toml` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FyndConfig {
    pub swipe: SwipeSettings,
    pub ranking: RankingSettings,
    pub exit_guard: ExitGuardSettings,
    pub storage: StorageSettings,
}

/// Gesture thresholds and animation timing for the card deck.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SwipeSettings {
    /// Horizontal displacement (density-independent units) a drag must
    /// exceed at release to count as a decisive swipe.
    pub commit_threshold: f32,
    /// How long the off-screen animation runs before the queue advances.
    /// Clamped to `MIN_TRANSITION_MS..=MAX_TRANSITION_MS`.
    pub transition_ms: u64,
}

pub const MIN_TRANSITION_MS: u64 = 300;
pub const MAX_TRANSITION_MS: u64 = 500;

impl SwipeSettings {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(
            self.transition_ms
                .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
        )
    }
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            commit_threshold: 100.0,
            transition_ms: 400,
        }
    }
}

/// Weights of the match score: `overlap * interest_weight + jitter`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RankingSettings {
    pub interest_weight: u32,
    /// Inclusive upper bound of the uniform jitter term.
    pub jitter_max: u32,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            interest_weight: 10,
            jitter_max: 100,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExitGuardSettings {
    /// Window in which a second back press exits the app.
    pub window_ms: u64,
}

impl Default for ExitGuardSettings {
    fn default() -> Self {
        Self { window_ms: 2000 }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for local preference files. `None` uses
    /// `preferences/` under the config directory.
    pub preferences_dir: Option<PathBuf>,
}
