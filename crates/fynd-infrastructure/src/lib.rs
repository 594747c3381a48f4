//! Adapters for the Fynd ports: in-memory document store and identity
//! provider, file-backed preference scopes, the profile/theme caches built
//! on them, configuration loading and tracing setup.

pub mod cache;
pub mod config_service;
pub mod in_memory_identity;
pub mod in_memory_user_store;
pub mod logging;
pub mod paths;
pub mod preferences;
pub mod seed;
pub mod storage;

pub use cache::{CachedProfile, ProfileCache, ThemePreference};
pub use config_service::ConfigService;
pub use in_memory_identity::InMemoryIdentityProvider;
pub use in_memory_user_store::InMemoryUserStore;
pub use logging::init_tracing;
pub use paths::FyndPaths;
pub use preferences::{InMemoryPreferenceStore, JsonFilePreferenceStore};
pub use seed::SeedData;
