//! In-process document store for the `users` collection.
//!
//! Stands in for the hosted store in tests, the CLI and previews. Supports
//! simulated outages and query latency so callers can exercise their
//! failure and staleness paths.

use async_trait::async_trait;
use fynd_core::account::{StoredUser, UserDocument, UserQuery, UserStore, UserUpdate};
use fynd_core::error::{FyndError, Result};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<String, UserDocument>>,
    offline: AtomicBool,
    query_count: AtomicUsize,
    query_delay: std::sync::Mutex<Option<Duration>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = (S, UserDocument)>,
        S: Into<String>,
    {
        Self {
            users: RwLock::new(users.into_iter().map(|(id, doc)| (id.into(), doc)).collect()),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with a network error until reset.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of `query` calls that reached the collection.
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }

    /// Delays each `query` by `delay` before it reads the collection.
    pub fn set_query_delay(&self, delay: Option<Duration>) {
        *self
            .query_delay
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = delay;
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn ensure_online(&self, operation: &str) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            tracing::debug!(operation, "User store offline");
            return Err(FyndError::network(format!("{operation}: store unreachable")));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &str) -> Result<Option<UserDocument>> {
        self.ensure_online("get")?;
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn query(&self, query: &UserQuery) -> Result<Vec<StoredUser>> {
        self.ensure_online("query")?;
        let delay = *self
            .query_delay
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.query_count.fetch_add(1, Ordering::SeqCst);

        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|(_, doc)| query.matches(doc))
            .map(|(id, doc)| StoredUser {
                id: id.clone(),
                document: doc.clone(),
            })
            .collect())
    }

    async fn set(&self, id: &str, document: UserDocument) -> Result<()> {
        self.ensure_online("set")?;
        self.users.write().await.insert(id.to_string(), document);
        Ok(())
    }

    async fn update(&self, id: &str, update: UserUpdate) -> Result<()> {
        self.ensure_online("update")?;
        let mut users = self.users.write().await;
        let document = users
            .get_mut(id)
            .ok_or_else(|| FyndError::not_found("User", id))?;
        update.apply_to(document);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.ensure_online("delete")?;
        self.users.write().await.remove(id);
        Ok(())
    }
}
