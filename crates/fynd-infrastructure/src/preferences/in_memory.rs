use fynd_core::error::Result;
use fynd_core::preference::PreferenceStore;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Text(String),
    Flag(bool),
}

/// Volatile preference scope, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, key: &str, entry: Entry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry);
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(Entry::Text(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(Entry::Flag(value)) => *value,
            _ => default,
        }
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.insert(key, Entry::Text(value.to_string()));
        Ok(())
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.insert(key, Entry::Flag(value));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
