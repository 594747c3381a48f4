//! Sign-in, profile completion, start routing and account lifecycle.

use fynd_core::account::avatar::{DEFAULT_AVATAR_KEY, random_avatar};
use fynd_core::account::{Gender, UserDocument, UserStore, UserUpdate};
use fynd_core::error::{FyndError, Result};
use fynd_core::identity::{AuthenticatedUser, IdentityProvider};
use fynd_core::navigation::Route;
use fynd_infrastructure::ProfileCache;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    pub user: AuthenticatedUser,
    /// A user document was created by this sign-in.
    pub created: bool,
    /// Gender is unset, so the one-time completion flow must run.
    pub needs_completion: bool,
}

pub struct AuthUseCase {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn UserStore>,
    profile_cache: Arc<ProfileCache>,
}

impl AuthUseCase {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn UserStore>,
        profile_cache: Arc<ProfileCache>,
    ) -> Self {
        Self {
            identity,
            store,
            profile_cache,
        }
    }

    /// Signs in with a provider token and makes sure a user document exists.
    ///
    /// A first sign-in creates `{name, email, gender: null}` and then assigns
    /// a random avatar from the unisex pool.
    pub async fn sign_in(&self, token: &str) -> Result<SignInOutcome> {
        let user = self.identity.sign_in_with_token(token).await?;

        let (document, created) = match self.store.get(&user.id).await? {
            Some(document) => (document, false),
            None => {
                let mut document = UserDocument {
                    name: user.display_name.clone(),
                    email: user.email.clone(),
                    gender: None,
                    avatar: Some(DEFAULT_AVATAR_KEY.to_string()),
                    ..Default::default()
                };
                self.store.set(&user.id, document.clone()).await?;

                let avatar = random_avatar(None, &mut rand::thread_rng());
                self.store
                    .update(&user.id, UserUpdate::new().avatar(avatar))
                    .await?;
                document.avatar = Some(avatar.to_string());
                tracing::info!(user_id = %user.id, avatar, "Created user document");
                (document, true)
            }
        };

        Ok(SignInOutcome {
            needs_completion: document.needs_completion(),
            user,
            created,
        })
    }

    /// One-time completion of name, date of birth and gender.
    ///
    /// All three must be non-blank and gender must be `Male` or `Female`.
    /// Afterwards a random avatar for that gender is assigned.
    pub async fn complete_profile(
        &self,
        user_id: &str,
        name: &str,
        dob: &str,
        gender: &str,
    ) -> Result<()> {
        if [name, dob, gender].iter().any(|field| field.trim().is_empty()) {
            return Err(FyndError::precondition("name, date of birth and gender are required"));
        }
        let gender = Gender::parse(gender)
            .ok_or_else(|| FyndError::precondition(format!("unknown gender '{gender}'")))?;

        self.store
            .update(
                user_id,
                UserUpdate::new().name(name).dob(dob).gender(gender),
            )
            .await?;

        let avatar = random_avatar(Some(gender), &mut rand::thread_rng());
        self.store
            .update(user_id, UserUpdate::new().avatar(avatar))
            .await?;
        tracing::info!(user_id, %gender, avatar, "Profile completed");
        Ok(())
    }

    /// Where the app should land after the splash screen.
    ///
    /// A store failure is logged and routes to login.
    pub async fn resolve_start_route(&self) -> Route {
        let Some(user) = self.identity.current_user().await else {
            return Route::Login;
        };
        match self.store.get(&user.id).await {
            Ok(Some(document)) if !document.needs_completion() => Route::Home,
            Ok(_) => Route::SelectGender,
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "Start route lookup failed");
                Route::Login
            }
        }
    }

    pub async fn logout(&self) -> Result<()> {
        self.identity.sign_out().await?;
        self.profile_cache.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Deletes the user document, then the provider identity.
    ///
    /// The document goes first so a failure leaves the user signed in and
    /// able to retry. The cached profile is cleared only when both deletions
    /// succeed.
    pub async fn delete_account(&self) -> Result<()> {
        let user = self
            .identity
            .current_user()
            .await
            .ok_or(FyndError::NotSignedIn)?;

        self.store.delete(&user.id).await?;
        self.identity.delete_current_user().await?;
        self.profile_cache.clear()?;
        tracing::info!(user_id = %user.id, "Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fynd_core::account::avatar::{FEMALE_AVATARS, is_known_avatar};
    use fynd_infrastructure::{
        CachedProfile, InMemoryIdentityProvider, InMemoryPreferenceStore, InMemoryUserStore,
    };

    struct Fixture {
        identity: Arc<InMemoryIdentityProvider>,
        store: Arc<InMemoryUserStore>,
        cache: Arc<ProfileCache>,
        auth: AuthUseCase,
    }

    async fn fixture() -> Fixture {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        identity
            .register_with_id("tok", "u1", Some("Priya"), Some("priya@example.com"))
            .await;
        let store = Arc::new(InMemoryUserStore::new());
        let cache = Arc::new(ProfileCache::load(Arc::new(InMemoryPreferenceStore::new())));
        let auth = AuthUseCase::new(identity.clone(), store.clone(), cache.clone());
        Fixture {
            identity,
            store,
            cache,
            auth,
        }
    }

    #[tokio::test]
    async fn test_first_sign_in_creates_document() {
        let f = fixture().await;
        let outcome = f.auth.sign_in("tok").await.unwrap();
        assert!(outcome.created);
        assert!(outcome.needs_completion);

        let document = f.store.get("u1").await.unwrap().unwrap();
        assert_eq!(document.name.as_deref(), Some("Priya"));
        assert_eq!(document.email.as_deref(), Some("priya@example.com"));
        assert!(document.gender.is_none());
        let avatar = document.avatar.unwrap();
        assert!(avatar == DEFAULT_AVATAR_KEY || is_known_avatar(&avatar), "{avatar}");

        let again = f.auth.sign_in("tok").await.unwrap();
        assert!(!again.created);
    }

    #[tokio::test]
    async fn test_complete_profile_then_route_home() {
        let f = fixture().await;
        f.auth.sign_in("tok").await.unwrap();
        assert_eq!(f.auth.resolve_start_route().await, Route::SelectGender);

        f.auth
            .complete_profile("u1", "Priya", "4/5/1997", "Female")
            .await
            .unwrap();
        let document = f.store.get("u1").await.unwrap().unwrap();
        assert_eq!(document.gender.as_deref(), Some("Female"));
        assert!(FEMALE_AVATARS.contains(&document.avatar.as_deref().unwrap()));
        assert_eq!(f.auth.resolve_start_route().await, Route::Home);
    }

    #[tokio::test]
    async fn test_complete_profile_requires_fields() {
        let f = fixture().await;
        f.auth.sign_in("tok").await.unwrap();
        for (name, dob, gender) in [("", "1/1/2000", "Male"), ("A", " ", "Male"), ("A", "1/1/2000", "x")] {
            let err = f.auth.complete_profile("u1", name, dob, gender).await.unwrap_err();
            assert!(err.is_precondition());
        }
        assert!(f.store.get("u1").await.unwrap().unwrap().needs_completion());
    }

    #[tokio::test]
    async fn test_start_route_without_user_or_store() {
        let f = fixture().await;
        assert_eq!(f.auth.resolve_start_route().await, Route::Login);

        f.auth.sign_in("tok").await.unwrap();
        f.store.set_offline(true);
        assert_eq!(f.auth.resolve_start_route().await, Route::Login);
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces() {
        let f = fixture().await;
        f.identity.set_offline(true);
        assert!(f.auth.sign_in("tok").await.unwrap_err().is_network());
    }

    #[tokio::test]
    async fn test_logout_clears_cache() {
        let f = fixture().await;
        f.auth.sign_in("tok").await.unwrap();
        f.cache
            .save(CachedProfile {
                name: "Priya".to_string(),
                ..Default::default()
            })
            .unwrap();
        f.auth.logout().await.unwrap();
        assert_eq!(f.cache.snapshot(), CachedProfile::default());
        assert_eq!(f.auth.resolve_start_route().await, Route::Login);
    }

    #[tokio::test]
    async fn test_delete_account() {
        let f = fixture().await;
        assert!(f.auth.delete_account().await.unwrap_err().is_not_signed_in());

        f.auth.sign_in("tok").await.unwrap();
        f.auth.delete_account().await.unwrap();
        assert!(f.store.get("u1").await.unwrap().is_none());
        assert!(!f.identity.has_account("u1").await);
    }

    #[tokio::test]
    async fn test_delete_account_offline_store_keeps_identity_for_retry() {
        let f = fixture().await;
        f.auth.sign_in("tok").await.unwrap();

        f.store.set_offline(true);
        assert!(f.auth.delete_account().await.unwrap_err().is_network());
        assert!(f.identity.has_account("u1").await);
        assert_eq!(f.identity.current_user().await.unwrap().id, "u1");
        f.store.set_offline(false);
        assert!(f.store.get("u1").await.unwrap().is_some());

        f.auth.delete_account().await.unwrap();
        assert!(f.store.get("u1").await.unwrap().is_none());
        assert!(!f.identity.has_account("u1").await);
        assert!(f.identity.current_user().await.is_none());
    }
}
