//! Card swipe interaction.
//!
//! # Module Structure
//!
//! - `machine`: the gesture state machine (`Idle → Dragging → Committing → Settled`)
//! - `event`: events published when a card is swiped away or the deck runs dry

mod event;
mod machine;

pub use event::SwipeEvent;
pub use machine::{DragRelease, SwipeDirection, SwipeMachine, SwipePhase, SwipeRejected};
