//! Cached copy of the signed-in user's profile.
//!
//! Lets the profile screen render on cold start without a network round
//! trip, and keeps showing something when the store is unreachable.

use fynd_core::error::Result;
use fynd_core::preference::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

const KEY_NAME: &str = "name";
const KEY_DOB: &str = "dob";
const KEY_GENDER: &str = "gender";
const KEY_LANGUAGE: &str = "language";
const KEY_AVATAR: &str = "avatar";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedProfile {
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub language: String,
    pub avatar: String,
}

impl CachedProfile {
    /// True when every field the profile screen needs is present, so the
    /// network read can be skipped. The avatar is not required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.dob, &self.gender, &self.language]
            .iter()
            .all(|field| !field.is_empty())
    }
}

pub struct ProfileCache {
    store: Arc<dyn PreferenceStore>,
    mirror: RwLock<CachedProfile>,
}

impl ProfileCache {
    /// Loads the cached profile from `store`; absent keys read as `""`.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let profile = CachedProfile {
            name: store.get_string(KEY_NAME, ""),
            dob: store.get_string(KEY_DOB, ""),
            gender: store.get_string(KEY_GENDER, ""),
            language: store.get_string(KEY_LANGUAGE, ""),
            avatar: store.get_string(KEY_AVATAR, ""),
        };
        Self {
            store,
            mirror: RwLock::new(profile),
        }
    }

    pub fn snapshot(&self) -> CachedProfile {
        self.mirror
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Persists `profile` and, once stored, makes it visible to readers.
    pub fn save(&self, profile: CachedProfile) -> Result<()> {
        let mut mirror = self.mirror.write().unwrap_or_else(PoisonError::into_inner);
        self.persist(&profile)?;
        *mirror = profile;
        Ok(())
    }

    /// Applies `change` to the current profile and saves the result.
    ///
    /// The read, the change and the write happen under one lock, so
    /// concurrent updates to different fields never overwrite each other.
    pub fn update<F>(&self, change: F) -> Result<CachedProfile>
    where
        F: FnOnce(&mut CachedProfile),
    {
        let mut mirror = self.mirror.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = mirror.clone();
        change(&mut next);
        self.persist(&next)?;
        *mirror = next.clone();
        Ok(next)
    }

    fn persist(&self, profile: &CachedProfile) -> Result<()> {
        self.store.set_strings(&[
            (KEY_NAME, profile.name.as_str()),
            (KEY_DOB, profile.dob.as_str()),
            (KEY_GENDER, profile.gender.as_str()),
            (KEY_LANGUAGE, profile.language.as_str()),
            (KEY_AVATAR, profile.avatar.as_str()),
        ])
    }

    pub fn clear(&self) -> Result<()> {
        let mut mirror = self.mirror.write().unwrap_or_else(PoisonError::into_inner);
        self.store.clear()?;
        *mirror = CachedProfile::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{InMemoryPreferenceStore, JsonFilePreferenceStore};
    use tempfile::TempDir;

    fn profile() -> CachedProfile {
        CachedProfile {
            name: "Ravi".to_string(),
            dob: "3/4/1998".to_string(),
            gender: "Male".to_string(),
            language: "Telugu".to_string(),
            avatar: "male2".to_string(),
        }
    }

    #[test]
    fn test_empty_store_reads_blank() {
        let cache = ProfileCache::load(Arc::new(InMemoryPreferenceStore::new()));
        assert_eq!(cache.snapshot(), CachedProfile::default());
        assert!(!cache.snapshot().is_complete());
    }

    #[test]
    fn test_write_through_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFilePreferenceStore::open(temp_dir.path(), "profile_prefs"));
        let cache = ProfileCache::load(store);
        cache.save(profile()).unwrap();
        assert_eq!(cache.snapshot(), profile());

        let reloaded = ProfileCache::load(Arc::new(JsonFilePreferenceStore::open(
            temp_dir.path(),
            "profile_prefs",
        )));
        assert_eq!(reloaded.snapshot(), profile());
        assert!(reloaded.snapshot().is_complete());
    }

    #[test]
    fn test_update_and_clear() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let cache = ProfileCache::load(store.clone());
        cache.save(profile()).unwrap();

        let next = cache.update(|p| p.language = "Hindi".to_string()).unwrap();
        assert_eq!(next.language, "Hindi");
        assert_eq!(store.get_string("language", ""), "Hindi");

        cache.clear().unwrap();
        assert_eq!(cache.snapshot(), CachedProfile::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_avatar_still_complete() {
        let mut p = profile();
        p.avatar.clear();
        assert!(p.is_complete());
        p.language.clear();
        assert!(!p.is_complete());
    }

    #[test]
    fn test_concurrent_updates_keep_both_fields() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let cache = ProfileCache::load(store.clone());
        cache.save(profile()).unwrap();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..50 {
                    cache.update(|p| p.language = format!("L{i}")).unwrap();
                }
            });
            scope.spawn(|| {
                for i in 0..50 {
                    cache.update(|p| p.avatar = format!("A{i}")).unwrap();
                }
            });
        });

        let cached = cache.snapshot();
        assert_eq!(cached.language, "L49");
        assert_eq!(cached.avatar, "A49");
        assert_eq!(store.get_string("language", ""), "L49");
        assert_eq!(store.get_string("avatar", ""), "A49");
        assert_eq!(cached.name, "Ravi");
    }
}
