//! Configuration service implementation.
//!
//! Loads [`FyndConfig`] from `config.toml` (by default
//! `~/.config/fynd/config.toml`) and caches it.

use crate::paths::FyndPaths;
use fynd_core::config::FyndConfig;
use fynd_core::error::{FyndError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults. A file that fails to parse is logged
/// and also yields the defaults, so a bad edit never blocks startup.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<FyndConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform config file.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path` instead of the platform location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> FyndConfig {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref config) = *cached {
                return config.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "Using default configuration");
                FyndConfig::default()
            }
        };

        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = None;
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(FyndPaths::default().config_file()?),
        }
    }

    fn load_config(&self) -> Result<FyndConfig> {
        let path = self.config_path()?;
        read_config(&path)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses a config file; a missing file is the default config.
pub fn read_config(path: &Path) -> Result<FyndConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(FyndConfig::default());
        }
        Err(err) => return Err(err.into()),
    };
    toml::from_str(&text).map_err(|err| {
        FyndError::config(format!("Failed to parse {}: {}", path.display(), err))
    })
}
