//! Local file storage primitives.

pub mod atomic_json;

pub use atomic_json::AtomicJsonFile;
