//! Match discovery: candidate projection, ranking and selection.
//!
//! # Module Structure
//!
//! - `candidate`: `CandidateProfile` and the `CandidateQueue` consumed by the swipe deck
//! - `ranker`: scoring, ordering and the half-split shuffle (pure, RNG injected)
//! - `selector`: resolves the caller, queries the store and ranks the result

mod candidate;
mod ranker;
mod selector;

pub use candidate::{CandidateProfile, CandidateQueue};
pub use ranker::{Ranker, shuffle_halves};
pub use selector::{CandidateFetch, CandidatePool, CandidateSelector};
