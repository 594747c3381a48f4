//! Gesture-driven swipe state machine.
//!
//! The machine is purely synchronous. Whoever drives it is responsible for
//! waiting out the off-screen animation between [`SwipeMachine::release`]
//! returning `Commit` and calling [`SwipeMachine::complete_commit`].

use crate::matching::{CandidateProfile, CandidateQueue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opacity never drops below `1.0 - MAX_FADE` while dragging.
const MAX_FADE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// Card at rest, waiting for a drag.
    Idle,
    /// Pointer down, horizontal offset accumulating.
    Dragging,
    /// Decisive swipe detected; card animating off-screen.
    Committing(SwipeDirection),
    /// Head removed; the next card has not been bound yet.
    Settled,
    /// Nothing left to show.
    Empty,
}

/// Result of lifting the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    Commit(SwipeDirection),
    /// Below threshold: the card springs back, the queue is untouched.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwipeRejected {
    #[error("a swipe is still animating")]
    Committing,
    #[error("no card to swipe")]
    NoCard,
    #[error("no drag in progress")]
    NotDragging,
    #[error("no commit in progress")]
    NotCommitting,
}

#[derive(Debug, Clone)]
pub struct SwipeMachine {
    phase: SwipePhase,
    offset_x: f32,
    threshold: f32,
}

impl SwipeMachine {
    /// Creates a machine bound to `queue`'s current head.
    pub fn new(threshold: f32, queue: &CandidateQueue) -> Self {
        Self {
            phase: if queue.is_empty() {
                SwipePhase::Empty
            } else {
                SwipePhase::Idle
            },
            offset_x: 0.0,
            threshold,
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Current horizontal offset of the head card.
    pub fn offset(&self) -> f32 {
        self.offset_x
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Card opacity for the current offset.
    pub fn opacity(&self) -> f32 {
        if self.threshold <= 0.0 {
            return 1.0;
        }
        let fade = (self.offset_x.abs() / (self.threshold * 3.0)).min(MAX_FADE);
        1.0 - fade
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.phase, SwipePhase::Committing(_))
    }

    /// `Idle → Dragging`. Restarting an active drag keeps its offset.
    pub fn start_drag(&mut self) -> Result<(), SwipeRejected> {
        match self.phase {
            SwipePhase::Idle => {
                self.phase = SwipePhase::Dragging;
                self.offset_x = 0.0;
                Ok(())
            }
            SwipePhase::Dragging => Ok(()),
            SwipePhase::Committing(_) => Err(SwipeRejected::Committing),
            SwipePhase::Settled | SwipePhase::Empty => Err(SwipeRejected::NoCard),
        }
    }

    /// Adds the horizontal component of a pointer move; vertical motion is ignored.
    pub fn drag_by(&mut self, dx: f32, _dy: f32) -> Result<f32, SwipeRejected> {
        match self.phase {
            SwipePhase::Dragging => {
                self.offset_x += dx;
                Ok(self.offset_x)
            }
            SwipePhase::Committing(_) => Err(SwipeRejected::Committing),
            _ => Err(SwipeRejected::NotDragging),
        }
    }

    /// Ends the drag.
    ///
    /// Strictly beyond the threshold (either side) the machine enters
    /// `Committing`; otherwise the offset resets and it returns to `Idle`.
    pub fn release(&mut self) -> Result<DragRelease, SwipeRejected> {
        match self.phase {
            SwipePhase::Dragging => {}
            SwipePhase::Committing(_) => return Err(SwipeRejected::Committing),
            _ => return Err(SwipeRejected::NotDragging),
        }

        if self.offset_x.abs() > self.threshold {
            let direction = if self.offset_x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            };
            self.phase = SwipePhase::Committing(direction);
            Ok(DragRelease::Commit(direction))
        } else {
            self.offset_x = 0.0;
            self.phase = SwipePhase::Idle;
            Ok(DragRelease::Cancel)
        }
    }

    /// `Committing → Settled`: removes the head and resets the visual state.
    ///
    /// Returns the removed card and the swipe direction.
    pub fn complete_commit(
        &mut self,
        queue: &mut CandidateQueue,
    ) -> Result<(Option<CandidateProfile>, SwipeDirection), SwipeRejected> {
        let SwipePhase::Committing(direction) = self.phase else {
            return Err(SwipeRejected::NotCommitting);
        };
        let removed = queue.pop_head();
        self.offset_x = 0.0;
        self.phase = SwipePhase::Settled;
        Ok((removed, direction))
    }

    /// `Committing → Settled` without touching any queue.
    ///
    /// For when the card being animated out is no longer the head, e.g. the
    /// queue was replaced mid-transition.
    pub fn abandon_commit(&mut self) -> Result<SwipeDirection, SwipeRejected> {
        let SwipePhase::Committing(direction) = self.phase else {
            return Err(SwipeRejected::NotCommitting);
        };
        self.offset_x = 0.0;
        self.phase = SwipePhase::Settled;
        Ok(direction)
    }

    /// Binds whatever is now at the head of `queue`.
    ///
    /// Moves `Settled`/`Empty` to `Idle` when a card is available and to
    /// `Empty` otherwise. Also used after the feed swaps in a fresh queue.
    /// Has no effect while a drag or commit is in flight.
    pub fn bind(&mut self, queue: &CandidateQueue) -> SwipePhase {
        match self.phase {
            SwipePhase::Dragging | SwipePhase::Committing(_) => {}
            _ => {
                self.offset_x = 0.0;
                self.phase = if queue.is_empty() {
                    SwipePhase::Empty
                } else {
                    SwipePhase::Idle
                };
            }
        }
        self.phase
    }
}
