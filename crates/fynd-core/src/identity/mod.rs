//! Identity provider port.
//!
//! Session management is delegated to an external provider; Fynd only sees
//! an opaque authenticated-user handle.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Handle for the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges the token produced by an external sign-in flow for an
    /// authenticated user, which becomes the current user.
    async fn sign_in_with_token(&self, token: &str) -> Result<AuthenticatedUser>;

    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<AuthenticatedUser>;

    async fn sign_out(&self) -> Result<()>;

    /// Deletes the current user's identity.
    ///
    /// Fails with `NotSignedIn` when nobody is signed in.
    async fn delete_current_user(&self) -> Result<()>;
}
