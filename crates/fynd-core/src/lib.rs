//! Domain core for Fynd.
//!
//! Holds the data model, the ports to external collaborators (document
//! store, identity provider, local preferences), the candidate ranker and
//! the swipe state machine. Nothing in this crate performs I/O itself.

pub mod account;
pub mod config;
pub mod error;
pub mod identity;
pub mod matching;
pub mod navigation;
pub mod preference;
pub mod swipe;

// Re-export common error type
pub use error::{FyndError, Result};
