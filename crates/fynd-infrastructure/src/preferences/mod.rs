//! Preference store implementations.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryPreferenceStore;
pub use json_file::JsonFilePreferenceStore;
