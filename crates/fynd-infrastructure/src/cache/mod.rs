//! Read-through/write-through caches over a preference scope.
//!
//! Both holders are created once at startup and passed to the use cases
//! that need them.

mod profile_cache;
mod theme;

pub use profile_cache::{CachedProfile, ProfileCache};
pub use theme::ThemePreference;
