use super::SwipeDirection;
use serde::{Deserialize, Serialize};

/// Events published by the swipe deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwipeEvent {
    /// A decisive swipe removed the head card.
    Swiped {
        candidate_id: String,
        direction: SwipeDirection,
    },
    /// A drag ended below the threshold and the card returned to rest.
    Cancelled,
    /// The queue became empty; the feed should offer a refresh.
    Exhausted,
}
