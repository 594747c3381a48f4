//! Composition root wiring the ports into the use cases.

use crate::auth::{AuthUseCase, SignInOutcome};
use crate::deck::SwipeDeck;
use crate::feed::{CandidateFeed, RefreshOutcome};
use crate::profile::ProfileUseCase;
use crate::settings::SettingsUseCase;
use fynd_core::account::UserStore;
use fynd_core::config::FyndConfig;
use fynd_core::error::Result;
use fynd_core::identity::IdentityProvider;
use fynd_core::matching::{CandidateSelector, Ranker};
use fynd_core::preference::PreferenceStore;
use fynd_core::swipe::SwipePhase;
use fynd_infrastructure::{ProfileCache, ThemePreference};
use std::sync::Arc;

/// External collaborators the app is built on.
pub struct Ports {
    pub store: Arc<dyn UserStore>,
    pub identity: Arc<dyn IdentityProvider>,
    /// Backing scope of the profile cache.
    pub profile_prefs: Arc<dyn PreferenceStore>,
    /// Backing scope of theme and other settings.
    pub settings_prefs: Arc<dyn PreferenceStore>,
}

pub struct FyndApp {
    pub auth: AuthUseCase,
    pub profile: ProfileUseCase,
    pub settings: SettingsUseCase,
    pub deck: Arc<SwipeDeck>,
    identity: Arc<dyn IdentityProvider>,
}

impl FyndApp {
    pub fn new(config: &FyndConfig, ports: Ports) -> Self {
        let profile_cache = Arc::new(ProfileCache::load(ports.profile_prefs));
        let theme = Arc::new(ThemePreference::load(ports.settings_prefs));

        let selector = Arc::new(CandidateSelector::new(
            ports.store.clone(),
            Ranker::new(config.ranking.clone()),
        ));
        let feed = Arc::new(CandidateFeed::new(selector));

        Self {
            auth: AuthUseCase::new(
                ports.identity.clone(),
                ports.store.clone(),
                profile_cache.clone(),
            ),
            profile: ProfileUseCase::new(ports.store, profile_cache),
            settings: SettingsUseCase::new(theme, &config.exit_guard),
            deck: Arc::new(SwipeDeck::new(feed, &config.swipe)),
            identity: ports.identity,
        }
    }

    /// Refreshes the home feed for the signed-in user and rebinds the deck.
    ///
    /// With nobody signed in the feed is left alone and `Ok(None)` returned.
    pub async fn refresh_feed(&self) -> Result<Option<SwipePhase>> {
        let Some(user) = self.identity.current_user().await else {
            return Ok(None);
        };
        match self.deck.feed().refresh(&user.id).await? {
            RefreshOutcome::Published(_) => Ok(Some(self.deck.bind().await)),
            RefreshOutcome::Superseded => Ok(Some(self.deck.phase().await)),
        }
    }

    /// Signs in and loads the new user's feed.
    ///
    /// Whatever the previous user's feed held is dropped first. A failed
    /// feed load is logged and left for the next refresh; the sign-in
    /// itself still succeeds.
    pub async fn sign_in(&self, token: &str) -> Result<SignInOutcome> {
        let outcome = self.auth.sign_in(token).await?;
        self.clear_feed().await;
        if let Err(err) = self.refresh_feed().await {
            tracing::warn!(user_id = %outcome.user.id, error = %err, "Initial feed load failed");
        }
        Ok(outcome)
    }

    pub async fn logout(&self) -> Result<()> {
        self.auth.logout().await?;
        self.clear_feed().await;
        Ok(())
    }

    pub async fn delete_account(&self) -> Result<()> {
        self.auth.delete_account().await?;
        self.clear_feed().await;
        Ok(())
    }

    async fn clear_feed(&self) {
        self.deck.feed().reset().await;
        self.deck.bind().await;
    }
}
