//! Languages offered by the profile editor.
//!
//! Matching compares stored strings for equality; this list only constrains
//! what the editor lets a user pick.

pub const SUPPORTED_LANGUAGES: [&str; 11] = [
    "Malayalam",
    "Hindi",
    "Tamil",
    "Marathi",
    "Bengali",
    "Telugu",
    "Kannada",
    "Gujarati",
    "Odia",
    "Punjabi",
    "English",
];

pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}
