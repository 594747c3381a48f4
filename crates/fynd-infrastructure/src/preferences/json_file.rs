//! File-backed preference scope.
//!
//! Each scope is one JSON object on disk (`<dir>/<scope>.json`). The whole
//! map is mirrored in memory; a write builds the next map, persists it
//! atomically and only then swaps the mirror, all under the mirror's write
//! lock.

use crate::storage::AtomicJsonFile;
use fynd_core::error::Result;
use fynd_core::preference::PreferenceStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

type Entries = BTreeMap<String, Value>;

pub struct JsonFilePreferenceStore {
    file: AtomicJsonFile<Entries>,
    mirror: RwLock<Entries>,
}

impl JsonFilePreferenceStore {
    /// Opens the scope stored under `dir`.
    ///
    /// An unreadable file is logged and treated as empty; the next write
    /// replaces it.
    pub fn open(dir: &Path, scope: &str) -> Self {
        let file = AtomicJsonFile::new(dir.join(format!("{scope}.json")));
        let entries = match file.load() {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(scope, error = %err, "Falling back to empty preferences");
                Entries::new()
            }
        };

        Self {
            file,
            mirror: RwLock::new(entries),
        }
    }

    fn read(&self, key: &str) -> Option<Value> {
        self.mirror
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Entries),
    {
        let mut mirror = self.mirror.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = mirror.clone();
        apply(&mut next);
        self.file.save(&next)?;
        *mirror = next;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.read(key) {
            Some(Value::String(value)) => value,
            _ => default.to_string(),
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.read(key) {
            Some(Value::Bool(value)) => value,
            _ => default,
        }
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.write(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.write(|entries| {
            entries.insert(key.to_string(), Value::Bool(value));
        })
    }

    fn set_strings(&self, values: &[(&str, &str)]) -> Result<()> {
        self.write(|entries| {
            for (key, value) in values {
                entries.insert(key.to_string(), Value::String(value.to_string()));
            }
        })
    }

    fn clear(&self) -> Result<()> {
        let mut mirror = self.mirror.write().unwrap_or_else(PoisonError::into_inner);
        self.file.remove()?;
        mirror.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFilePreferenceStore::open(temp_dir.path(), "settings_prefs");
        assert!(!store.get_bool("dark_theme", false));
        assert_eq!(store.get_string("name", "fallback"), "fallback");
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = JsonFilePreferenceStore::open(temp_dir.path(), "profile_prefs");
            store.set_string("name", "Asha").unwrap();
            store
                .set_strings(&[("dob", "1/2/1999"), ("language", "Hindi")])
                .unwrap();
            store.set_bool("flag", true).unwrap();
        }

        let reopened = JsonFilePreferenceStore::open(temp_dir.path(), "profile_prefs");
        assert_eq!(reopened.get_string("name", ""), "Asha");
        assert_eq!(reopened.get_string("dob", ""), "1/2/1999");
        assert_eq!(reopened.get_string("language", ""), "Hindi");
        assert!(reopened.get_bool("flag", false));
    }

    #[test]
    fn test_type_mismatch_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFilePreferenceStore::open(temp_dir.path(), "s");
        store.set_string("dark_theme", "yes").unwrap();
        assert!(store.get_bool("dark_theme", true));
        assert!(!store.get_bool("dark_theme", false));
    }

    #[test]
    fn test_clear_removes_file_and_values() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFilePreferenceStore::open(temp_dir.path(), "s");
        store.set_string("k", "v").unwrap();
        assert!(temp_dir.path().join("s.json").exists());

        store.clear().unwrap();
        assert_eq!(store.get_string("k", ""), "");
        assert!(!temp_dir.path().join("s.json").exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("s.json"), "not json").unwrap();
        let store = JsonFilePreferenceStore::open(temp_dir.path(), "s");
        assert_eq!(store.get_string("k", "d"), "d");
        store.set_string("k", "v").unwrap();
        assert_eq!(store.get_string("k", "d"), "v");
    }
}
