//! Remote document store port.

use super::{Gender, UserDocument, UserUpdate};
use crate::error::Result;
use async_trait::async_trait;

/// A document together with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub id: String,
    pub document: UserDocument,
}

/// Equality filters for a candidate query: `language == L AND gender == G`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub language: String,
    pub gender: Gender,
}

impl UserQuery {
    pub fn new(language: impl Into<String>, gender: Gender) -> Self {
        Self {
            language: language.into(),
            gender,
        }
    }

    pub fn matches(&self, document: &UserDocument) -> bool {
        document.language.as_deref() == Some(self.language.as_str())
            && document.gender.as_deref() == Some(self.gender.as_str())
    }
}

/// An abstract repository over the `users` collection of the remote
/// document database.
///
/// Every call may fail because the device is offline or the backend rejects
/// it; implementations map such failures to [`crate::FyndError::Network`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Reads a document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(doc))`: Document exists
    /// - `Ok(None)`: No document with this id
    /// - `Err(_)`: The store could not be reached
    async fn get(&self, id: &str) -> Result<Option<UserDocument>>;

    /// Returns every document matching the query, in one round trip.
    async fn query(&self, query: &UserQuery) -> Result<Vec<StoredUser>>;

    /// Creates or replaces a document.
    async fn set(&self, id: &str, document: UserDocument) -> Result<()>;

    /// Writes only the fields named in `update`.
    ///
    /// Fails with `NotFound` when the document does not exist.
    async fn update(&self, id: &str, update: UserUpdate) -> Result<()>;

    /// Deletes a document. Deleting a missing document succeeds.
    async fn delete(&self, id: &str) -> Result<()>;
}
