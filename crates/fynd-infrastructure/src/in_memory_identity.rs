//! Token-table identity provider.
//!
//! Maps sign-in tokens to accounts registered up front, standing in for the
//! external provider's credential exchange.

use async_trait::async_trait;
use fynd_core::error::{FyndError, Result};
use fynd_core::identity::{AuthenticatedUser, IdentityProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, AuthenticatedUser>>,
    current: RwLock<Option<AuthenticatedUser>>,
    offline: AtomicBool,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account reachable through `token`, with a fresh id.
    pub async fn register(
        &self,
        token: impl Into<String>,
        display_name: Option<&str>,
        email: Option<&str>,
    ) -> AuthenticatedUser {
        self.register_with_id(token, Uuid::new_v4().to_string(), display_name, email)
            .await
    }

    pub async fn register_with_id(
        &self,
        token: impl Into<String>,
        id: impl Into<String>,
        display_name: Option<&str>,
        email: Option<&str>,
    ) -> AuthenticatedUser {
        let user = AuthenticatedUser {
            id: id.into(),
            display_name: display_name.map(str::to_string),
            email: email.map(str::to_string),
        };
        self.accounts
            .write()
            .await
            .insert(token.into(), user.clone());
        user
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Whether an account with `id` is still registered.
    pub async fn has_account(&self, id: &str) -> bool {
        self.accounts.read().await.values().any(|user| user.id == id)
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(FyndError::network("identity provider unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in_with_token(&self, token: &str) -> Result<AuthenticatedUser> {
        self.ensure_online()?;
        let user = self
            .accounts
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or_else(|| FyndError::not_found("Credential", token))?;

        tracing::info!(user_id = %user.id, "Signed in");
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }

    async fn current_user(&self) -> Option<AuthenticatedUser> {
        self.current.read().await.clone()
    }

    async fn sign_out(&self) -> Result<()> {
        *self.current.write().await = None;
        Ok(())
    }

    async fn delete_current_user(&self) -> Result<()> {
        self.ensure_online()?;
        let mut current = self.current.write().await;
        let Some(user) = current.take() else {
            return Err(FyndError::NotSignedIn);
        };
        self.accounts
            .write()
            .await
            .retain(|_, account| account.id != user.id);
        tracing::info!(user_id = %user.id, "Identity deleted");
        Ok(())
    }
}
