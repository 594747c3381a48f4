//! Home feed: owns the candidate queue and refreshes it from the selector.
//!
//! Every refresh is stamped with a generation number. Only the latest
//! refresh may publish; an older one finishing late is dropped, so a slow
//! fetch can never overwrite a newer queue.

use fynd_core::error::Result;
use fynd_core::matching::{CandidateFetch, CandidateProfile, CandidateQueue, CandidateSelector};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// What the feed currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// Nothing fetched yet.
    Loading,
    Ready { remaining: usize },
    /// The last fetch (or the user's swiping) left nothing to show.
    NoMoreProfiles,
    /// Gender or language missing; no query was issued.
    ProfileIncomplete,
}

impl FeedState {
    fn for_queue(queue: &CandidateQueue) -> Self {
        if queue.is_empty() {
            Self::NoMoreProfiles
        } else {
            Self::Ready {
                remaining: queue.len(),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Published(FeedState),
    /// A newer refresh was issued while this one was in flight.
    Superseded,
}

struct FeedInner {
    queue: CandidateQueue,
    state: FeedState,
}

pub struct CandidateFeed {
    selector: Arc<CandidateSelector>,
    inner: RwLock<FeedInner>,
    generation: AtomicU64,
}

impl CandidateFeed {
    pub fn new(selector: Arc<CandidateSelector>) -> Self {
        Self {
            selector,
            inner: RwLock::new(FeedInner {
                queue: CandidateQueue::empty(),
                state: FeedState::Loading,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches a fresh queue for `user_id` and swaps it in.
    ///
    /// On failure the current queue and state are kept and the error is
    /// returned. A completion that has been superseded is discarded, whether
    /// it succeeded or failed.
    pub async fn refresh(&self, user_id: &str) -> Result<RefreshOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(user_id, generation, "Refreshing candidate feed");

        let fetched = self.selector.fetch_candidates(user_id).await;

        let mut inner = self.inner.write().await;
        let latest = self.generation.load(Ordering::SeqCst);
        if generation != latest {
            tracing::info!(user_id, generation, latest, "Discarding stale candidate fetch");
            return Ok(RefreshOutcome::Superseded);
        }

        let fetched = match fetched {
            Ok(fetched) => fetched,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "Candidate fetch failed; keeping current queue");
                return Err(err);
            }
        };

        let (queue, state) = match fetched {
            CandidateFetch::Matched(queue) => {
                let state = FeedState::for_queue(&queue);
                (queue, state)
            }
            CandidateFetch::ProfileIncomplete => {
                (CandidateQueue::empty(), FeedState::ProfileIncomplete)
            }
        };
        inner.queue = queue;
        inner.state = state;
        tracing::info!(user_id, generation, ?state, "Candidate feed published");
        Ok(RefreshOutcome::Published(state))
    }

    /// Drops the current queue and goes back to `Loading`.
    ///
    /// Any refresh still in flight is superseded, so a fetch issued for a
    /// previous user can never be published after this returns.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        inner.queue = CandidateQueue::empty();
        inner.state = FeedState::Loading;
        tracing::debug!(generation, "Candidate feed reset");
    }

    pub async fn state(&self) -> FeedState {
        self.inner.read().await.state
    }

    pub async fn head(&self) -> Option<CandidateProfile> {
        self.inner.read().await.queue.head().cloned()
    }

    pub async fn remaining(&self) -> usize {
        self.inner.read().await.queue.len()
    }

    /// A copy of the current queue.
    pub async fn snapshot(&self) -> CandidateQueue {
        self.inner.read().await.queue.clone()
    }

    /// Runs `f` against the queue under the write lock, then refreshes the
    /// published state to match.
    pub(crate) async fn with_queue<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut CandidateQueue) -> T,
    {
        let mut inner = self.inner.write().await;
        let result = f(&mut inner.queue);
        if !matches!(inner.state, FeedState::ProfileIncomplete | FeedState::Loading) {
            inner.state = FeedState::for_queue(&inner.queue);
        }
        result
    }
}
