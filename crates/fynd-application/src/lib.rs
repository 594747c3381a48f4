//! Application layer for Fynd.
//!
//! Use cases that coordinate the domain core with the adapters: the home
//! feed and its swipe deck, sign-in and account lifecycle, profile editing
//! and settings.

pub mod app;
pub mod auth;
pub mod deck;
pub mod feed;
pub mod profile;
pub mod settings;

pub use app::{FyndApp, Ports};
pub use auth::{AuthUseCase, SignInOutcome};
pub use deck::SwipeDeck;
pub use feed::{CandidateFeed, FeedState, RefreshOutcome};
pub use profile::{LoadedProfile, ProfileSource, ProfileUseCase};
pub use settings::SettingsUseCase;
