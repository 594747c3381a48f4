//! Swipe deck driver.
//!
//! Feeds pointer input into a [`SwipeMachine`] bound to the feed's queue,
//! waits out the off-screen transition after a decisive swipe and then
//! advances the queue. Outcomes are broadcast as [`SwipeEvent`]s.

use crate::feed::CandidateFeed;
use fynd_core::config::SwipeSettings;
use fynd_core::matching::{CandidateProfile, CandidateQueue};
use fynd_core::swipe::{DragRelease, SwipeEvent, SwipeMachine, SwipePhase, SwipeRejected};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, broadcast};

const EVENT_CAPACITY: usize = 64;

/// Machine plus the id of the card the active drag started on.
struct DeckState {
    machine: SwipeMachine,
    dragged_id: Option<String>,
}

pub struct SwipeDeck {
    feed: Arc<CandidateFeed>,
    state: Mutex<DeckState>,
    transition: Duration,
    events: broadcast::Sender<SwipeEvent>,
}

impl SwipeDeck {
    /// Creates a deck over `feed`. Call [`SwipeDeck::bind`] after the feed
    /// publishes a queue.
    pub fn new(feed: Arc<CandidateFeed>, settings: &SwipeSettings) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            feed,
            state: Mutex::new(DeckState {
                machine: SwipeMachine::new(settings.commit_threshold, &CandidateQueue::empty()),
                dragged_id: None,
            }),
            transition: settings.transition(),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SwipeEvent> {
        self.events.subscribe()
    }

    pub fn feed(&self) -> &Arc<CandidateFeed> {
        &self.feed
    }

    /// Binds the feed's current head, e.g. after a refresh.
    pub async fn bind(&self) -> SwipePhase {
        let mut state = self.state.lock().await;
        let queue = self.feed.snapshot().await;
        state.machine.bind(&queue)
    }

    pub async fn phase(&self) -> SwipePhase {
        self.state.lock().await.machine.phase()
    }

    pub async fn offset(&self) -> f32 {
        self.state.lock().await.machine.offset()
    }

    pub async fn opacity(&self) -> f32 {
        self.state.lock().await.machine.opacity()
    }

    /// The card currently shown.
    pub async fn head(&self) -> Option<CandidateProfile> {
        self.feed.head().await
    }

    /// Starts a drag on the card currently shown and remembers which card
    /// that is.
    pub async fn start_drag(&self) -> Result<(), SwipeRejected> {
        let mut state = self.state.lock().await;
        let fresh = state.machine.phase() == SwipePhase::Idle;
        state.machine.start_drag()?;
        if fresh {
            state.dragged_id = self.feed.head().await.map(|head| head.id);
        }
        Ok(())
    }

    pub async fn drag_by(&self, dx: f32, dy: f32) -> Result<f32, SwipeRejected> {
        self.state.lock().await.machine.drag_by(dx, dy)
    }

    /// Ends the drag.
    ///
    /// A decisive release resolves only after the transition has elapsed and
    /// the dragged card has been removed; input arriving meanwhile is
    /// rejected with [`SwipeRejected::Committing`]. If the feed replaced the
    /// queue since the drag started, nothing is removed.
    pub async fn release(&self) -> Result<DragRelease, SwipeRejected> {
        let (release, dragged_id) = {
            let mut state = self.state.lock().await;
            let release = state.machine.release()?;
            (release, state.dragged_id.take())
        };

        match release {
            DragRelease::Cancel => {
                self.publish(SwipeEvent::Cancelled);
            }
            DragRelease::Commit(_) => {
                tokio::time::sleep(self.transition).await;
                self.settle(dragged_id).await;
            }
        }
        Ok(release)
    }

    /// Convenience for a single drag of `dx` followed by release.
    pub async fn swipe(&self, dx: f32) -> Result<DragRelease, SwipeRejected> {
        self.start_drag().await?;
        self.drag_by(dx, 0.0).await?;
        self.release().await
    }

    async fn settle(&self, dragged_id: Option<String>) {
        let mut state = self.state.lock().await;
        let machine = &mut state.machine;
        let removed = self
            .feed
            .with_queue(|queue| {
                let head_id = queue.head().map(|head| head.id.clone());
                if head_id.is_some() && head_id == dragged_id {
                    machine.complete_commit(queue)
                } else {
                    machine.abandon_commit().map(|dir| (None, dir))
                }
            })
            .await;

        match removed {
            Ok((Some(card), direction)) => {
                tracing::debug!(candidate_id = %card.id, ?direction, "Card swiped");
                self.publish(SwipeEvent::Swiped {
                    candidate_id: card.id,
                    direction,
                });
            }
            Ok((None, direction)) => {
                tracing::debug!(
                    ?direction,
                    dragged_id = ?dragged_id,
                    "Dragged card no longer at the head; nothing removed"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "Swipe settle out of order");
            }
        }

        let queue = self.feed.snapshot().await;
        if state.machine.bind(&queue) == SwipePhase::Empty {
            tracing::info!("Candidate queue exhausted");
            self.publish(SwipeEvent::Exhausted);
        }
    }

    fn publish(&self, event: SwipeEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
