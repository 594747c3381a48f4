//! Unified path management for fynd files.
//!
//! ```text
//! ~/.config/fynd/              # Config directory
//! ├── config.toml              # Application configuration
//! └── preferences/             # Preference scopes
//!     ├── profile_prefs.json   # Cached profile
//!     └── settings_prefs.json  # Theme and other settings
//! ```

use fynd_core::config::FyndConfig;
use std::path::PathBuf;

const APP_DIR: &str = "fynd";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for fynd_core::FyndError {
    fn from(err: PathError) -> Self {
        fynd_core::FyndError::config(err.to_string())
    }
}

/// Path resolution rooted at an optional base directory.
///
/// With no base the platform config directory is used (XDG on Linux).
#[derive(Debug, Clone, Default)]
pub struct FyndPaths {
    base: Option<PathBuf>,
}

impl FyndPaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the fynd configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: `<base>` or e.g. `~/.config/fynd/`
    /// - `Err(PathError::ConfigDirNotFound)`: no platform config directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding the preference scopes.
    ///
    /// An explicit `storage.preferences_dir` in `config` wins.
    pub fn preferences_dir(&self, config: &FyndConfig) -> Result<PathBuf, PathError> {
        match &config.storage.preferences_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.config_dir()?.join("preferences")),
        }
    }
}
