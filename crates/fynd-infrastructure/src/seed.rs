//! Seed files for the in-memory store.
//!
//! ```json
//! { "users": { "<id>": { "name": "...", "gender": "Female", ... } } }
//! ```

use crate::in_memory_user_store::InMemoryUserStore;
use fynd_core::account::UserDocument;
use fynd_core::error::{FyndError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: BTreeMap<String, UserDocument>,
}

impl SeedData {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            FyndError::io(format!("Failed to read seed {}: {}", path.display(), err))
        })?;
        let seed = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), users = seed.users.len(), "Seed loaded");
        Ok(seed)
    }

    pub fn into_store(self) -> InMemoryUserStore {
        InMemoryUserStore::from_users(self.users)
    }
}
