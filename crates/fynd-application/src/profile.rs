//! Profile screen: cache-first loading and field edits.

use fynd_core::account::avatar::{is_known_avatar, random_avatar, random_known_avatar};
use fynd_core::account::language::is_supported_language;
use fynd_core::account::{Gender, UserDocument, UserStore, UserUpdate};
use fynd_core::error::{FyndError, Result};
use fynd_infrastructure::{CachedProfile, ProfileCache};
use std::sync::Arc;

/// Where a loaded profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Cache,
    Remote,
    /// The store could not be read; possibly partial cached values.
    CacheFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    pub profile: CachedProfile,
    pub source: ProfileSource,
}

pub struct ProfileUseCase {
    store: Arc<dyn UserStore>,
    cache: Arc<ProfileCache>,
}

impl ProfileUseCase {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<ProfileCache>) -> Self {
        Self { store, cache }
    }

    pub fn cache(&self) -> &Arc<ProfileCache> {
        &self.cache
    }

    /// Loads the profile, preferring a complete cached copy.
    ///
    /// On a remote read an unknown avatar key is replaced by a random valid
    /// one and written back before the cache is refreshed.
    pub async fn load_profile(&self, user_id: &str) -> Result<LoadedProfile> {
        let cached = self.cache.snapshot();
        if cached.is_complete() {
            return Ok(LoadedProfile {
                profile: cached,
                source: ProfileSource::Cache,
            });
        }

        let document = match self.store.get(user_id).await {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::warn!(user_id, "No user document; showing cached profile");
                return Ok(Self::fallback(cached));
            }
            Err(err) => {
                tracing::warn!(user_id, error = %err, "Profile read failed; showing cached profile");
                return Ok(Self::fallback(cached));
            }
        };

        let avatar = self.ensure_avatar(user_id, &document).await;
        let profile = CachedProfile {
            name: document.name.unwrap_or_default(),
            dob: document.dob.unwrap_or_default(),
            gender: document.gender.unwrap_or_default(),
            language: document.language.unwrap_or_default(),
            avatar,
        };
        self.cache.save(profile.clone())?;
        Ok(LoadedProfile {
            profile,
            source: ProfileSource::Remote,
        })
    }

    /// Writes the edited fields and, once stored, the cache.
    ///
    /// The cached avatar is kept. A failed write leaves the cache untouched.
    pub async fn save_profile(
        &self,
        user_id: &str,
        name: &str,
        dob: &str,
        gender: &str,
        language: &str,
    ) -> Result<CachedProfile> {
        let parsed = Gender::parse(gender)
            .ok_or_else(|| FyndError::precondition(format!("unknown gender '{gender}'")))?;
        ensure_supported_language(language)?;

        self.store
            .update(
                user_id,
                UserUpdate::new()
                    .name(name)
                    .dob(dob)
                    .gender(parsed)
                    .language(language),
            )
            .await?;

        self.cache.update(|profile| {
            profile.name = name.to_string();
            profile.dob = dob.to_string();
            profile.gender = parsed.as_str().to_string();
            profile.language = language.to_string();
        })
    }

    pub async fn update_language(&self, user_id: &str, language: &str) -> Result<CachedProfile> {
        ensure_supported_language(language)?;
        self.store
            .update(user_id, UserUpdate::new().language(language))
            .await?;
        tracing::info!(user_id, language, "Language updated");
        self.cache
            .update(|profile| profile.language = language.to_string())
    }

    pub async fn update_avatar(&self, user_id: &str, key: &str) -> Result<CachedProfile> {
        if !is_known_avatar(key) {
            return Err(FyndError::precondition(format!("unknown avatar '{key}'")));
        }
        self.store
            .update(user_id, UserUpdate::new().avatar(key))
            .await?;
        self.cache.update(|profile| profile.avatar = key.to_string())
    }

    fn fallback(profile: CachedProfile) -> LoadedProfile {
        LoadedProfile {
            profile,
            source: ProfileSource::CacheFallback,
        }
    }

    /// Returns a valid avatar key for `document`, repairing the stored one
    /// if needed. A failed repair is logged; the new key is still shown.
    async fn ensure_avatar(&self, user_id: &str, document: &UserDocument) -> String {
        if let Some(key) = document.avatar.as_deref().filter(|key| is_known_avatar(key)) {
            return key.to_string();
        }

        let replacement = {
            let mut rng = rand::thread_rng();
            match document.gender.as_deref().and_then(Gender::parse) {
                Some(gender) => random_avatar(Some(gender), &mut rng),
                None => random_known_avatar(&mut rng),
            }
        };
        if let Err(err) = self
            .store
            .update(user_id, UserUpdate::new().avatar(replacement))
            .await
        {
            tracing::warn!(user_id, error = %err, "Failed to store replacement avatar");
        }
        replacement.to_string()
    }
}

fn ensure_supported_language(language: &str) -> Result<()> {
    if language.trim().is_empty() {
        return Err(FyndError::precondition("language is required"));
    }
    if !is_supported_language(language) {
        return Err(FyndError::precondition(format!(
            "unsupported language '{language}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fynd_core::account::avatar::MALE_AVATARS;
    use fynd_infrastructure::{InMemoryPreferenceStore, InMemoryUserStore};

    fn stored() -> UserDocument {
        UserDocument {
            name: Some("Kiran".to_string()),
            dob: Some("12/12/1994".to_string()),
            gender: Some("Male".to_string()),
            language: Some("Marathi".to_string()),
            avatar: Some("male3".to_string()),
            ..Default::default()
        }
    }

    fn use_case(store: Arc<InMemoryUserStore>) -> ProfileUseCase {
        let cache = Arc::new(ProfileCache::load(Arc::new(InMemoryPreferenceStore::new())));
        ProfileUseCase::new(store, cache)
    }

    #[tokio::test]
    async fn test_remote_then_cache() {
        let store = Arc::new(InMemoryUserStore::from_users([("u", stored())]));
        let profiles = use_case(store.clone());

        let first = profiles.load_profile("u").await.unwrap();
        assert_eq!(first.source, ProfileSource::Remote);
        assert_eq!(first.profile.avatar, "male3");

        // A complete cache answers without touching the store.
        store.set_offline(true);
        let second = profiles.load_profile("u").await.unwrap();
        assert_eq!(second.source, ProfileSource::Cache);
        assert_eq!(second.profile, first.profile);
    }

    #[tokio::test]
    async fn test_fallback_when_store_unreachable() {
        let store = Arc::new(InMemoryUserStore::from_users([("u", stored())]));
        let profiles = use_case(store.clone());
        profiles
            .cache()
            .save(CachedProfile {
                name: "Kiran".to_string(),
                ..Default::default()
            })
            .unwrap();

        store.set_offline(true);
        let loaded = profiles.load_profile("u").await.unwrap();
        assert_eq!(loaded.source, ProfileSource::CacheFallback);
        assert_eq!(loaded.profile.name, "Kiran");
        assert!(loaded.profile.language.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_avatar_is_repaired() {
        let mut document = stored();
        document.avatar = Some("default".to_string());
        let store = Arc::new(InMemoryUserStore::from_users([("u", document)]));
        let profiles = use_case(store.clone());

        let loaded = profiles.load_profile("u").await.unwrap();
        assert!(MALE_AVATARS.contains(&loaded.profile.avatar.as_str()));
        let written = store.get("u").await.unwrap().unwrap().avatar.unwrap();
        assert_eq!(written, loaded.profile.avatar);
    }

    #[tokio::test]
    async fn test_save_profile_keeps_avatar() {
        let store = Arc::new(InMemoryUserStore::from_users([("u", stored())]));
        let profiles = use_case(store.clone());
        profiles.load_profile("u").await.unwrap();

        let saved = profiles
            .save_profile("u", "Kiran P", "12/12/1994", "Male", "English")
            .await
            .unwrap();
        assert_eq!(saved.avatar, "male3");
        assert_eq!(saved.language, "English");
        let document = store.get("u").await.unwrap().unwrap();
        assert_eq!(document.name.as_deref(), Some("Kiran P"));
    }

    #[tokio::test]
    async fn test_failed_save_leaves_cache() {
        let store = Arc::new(InMemoryUserStore::from_users([("u", stored())]));
        let profiles = use_case(store.clone());
        profiles.load_profile("u").await.unwrap();
        let before = profiles.cache().snapshot();

        store.set_offline(true);
        let err = profiles
            .save_profile("u", "X", "1/1/2000", "Male", "Hindi")
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(profiles.cache().snapshot(), before);
    }

    #[tokio::test]
    async fn test_language_and_avatar_updates() {
        let store = Arc::new(InMemoryUserStore::from_users([("u", stored())]));
        let profiles = use_case(store.clone());

        let updated = profiles.update_language("u", "Gujarati").await.unwrap();
        assert_eq!(updated.language, "Gujarati");
        let updated = profiles.update_avatar("u", "male6").await.unwrap();
        assert_eq!(updated.avatar, "male6");
        assert_eq!(
            store.get("u").await.unwrap().unwrap().avatar.as_deref(),
            Some("male6")
        );

        let err = profiles.update_avatar("u", "wizard").await.unwrap_err();
        assert!(err.is_precondition());
    }

    #[tokio::test]
    async fn test_unsupported_language_is_rejected() {
        let store = Arc::new(InMemoryUserStore::from_users([("u", stored())]));
        let profiles = use_case(store.clone());
        profiles.load_profile("u").await.unwrap();
        let before = profiles.cache().snapshot();

        for language in ["Klingon", "", "hindi"] {
            let err = profiles.update_language("u", language).await.unwrap_err();
            assert!(err.is_precondition(), "{language}: {err}");
        }
        let err = profiles
            .save_profile("u", "Kiran", "1/1/1994", "Male", "Esperanto")
            .await
            .unwrap_err();
        assert!(err.is_precondition());

        assert_eq!(profiles.cache().snapshot(), before);
        assert_eq!(
            store.get("u").await.unwrap().unwrap().language.as_deref(),
            Some("Marathi")
        );
    }
}
