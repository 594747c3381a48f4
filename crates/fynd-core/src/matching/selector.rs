//! Candidate selection against the remote store.

use super::{CandidateQueue, Ranker};
use crate::account::{StoredUser, UserAccount, UserQuery, UserStore};
use crate::error::Result;
use chrono::NaiveDate;
use rand::Rng;
use std::sync::Arc;

/// Outcome of a fetch.
///
/// `ProfileIncomplete` is not an error: the caller has no gender or language
/// yet, so no matching query was issued and the feed should prompt the user
/// to complete their profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateFetch {
    Matched(CandidateQueue),
    ProfileIncomplete,
}

impl CandidateFetch {
    /// The resulting queue; empty for an incomplete profile.
    pub fn into_queue(self) -> CandidateQueue {
        match self {
            Self::Matched(queue) => queue,
            Self::ProfileIncomplete => CandidateQueue::empty(),
        }
    }

    pub fn is_profile_incomplete(&self) -> bool {
        matches!(self, Self::ProfileIncomplete)
    }
}

/// The requester and the raw query result, before ranking.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    pub requester: UserAccount,
    pub users: Vec<StoredUser>,
}

/// Selects and ranks candidates for the signed-in user.
pub struct CandidateSelector {
    store: Arc<dyn UserStore>,
    ranker: Ranker,
}

impl CandidateSelector {
    pub fn new(store: Arc<dyn UserStore>, ranker: Ranker) -> Self {
        Self { store, ranker }
    }

    /// Resolves the requester and queries opposite-gender users sharing
    /// their language.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(pool))`: the query ran
    /// - `Ok(None)`: gender or language missing, no query issued
    /// - `Err(_)`: a store call failed
    pub async fn load_pool(&self, user_id: &str) -> Result<Option<CandidatePool>> {
        let Some(document) = self.store.get(user_id).await? else {
            tracing::warn!(user_id, "No user document; skipping candidate query");
            return Ok(None);
        };
        let requester = UserAccount::from_document(user_id, &document);

        let Some(gender) = requester.gender else {
            tracing::info!(user_id, "Gender not set; skipping candidate query");
            return Ok(None);
        };
        if requester.language.trim().is_empty() {
            tracing::info!(user_id, "Language not set; skipping candidate query");
            return Ok(None);
        }

        let query = UserQuery::new(requester.language.clone(), gender.opposite());
        let users = self.store.query(&query).await?;
        tracing::debug!(
            user_id,
            language = %query.language,
            gender = %query.gender,
            results = users.len(),
            "Candidate query finished"
        );

        Ok(Some(CandidatePool { requester, users }))
    }

    /// Fetches and ranks candidates with an explicit date and RNG.
    pub async fn fetch_candidates_with<R: Rng + ?Sized>(
        &self,
        user_id: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<CandidateFetch> {
        let Some(pool) = self.load_pool(user_id).await? else {
            return Ok(CandidateFetch::ProfileIncomplete);
        };
        Ok(CandidateFetch::Matched(self.ranker.rank(
            &pool.requester,
            &pool.users,
            today,
            rng,
        )))
    }

    /// Fetches and ranks candidates using the local date and thread RNG.
    pub async fn fetch_candidates(&self, user_id: &str) -> Result<CandidateFetch> {
        let Some(pool) = self.load_pool(user_id).await? else {
            return Ok(CandidateFetch::ProfileIncomplete);
        };
        let today = chrono::Local::now().date_naive();
        let queue = {
            let mut rng = rand::thread_rng();
            self.ranker
                .rank(&pool.requester, &pool.users, today, &mut rng)
        };
        tracing::info!(user_id, candidates = queue.len(), "Candidates ranked");
        Ok(CandidateFetch::Matched(queue))
    }
}
