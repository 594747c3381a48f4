//! Local key/value preference storage port.
//!
//! Preferences are grouped in named scopes (one file or shared-preferences
//! bucket per scope). Reads never fail: a missing or unreadable value
//! yields the supplied default.

use crate::error::Result;

/// Scope holding the cached copy of the user's profile.
pub const PROFILE_SCOPE: &str = "profile_prefs";

/// Scope holding UI settings such as the theme.
pub const SETTINGS_SCOPE: &str = "settings_prefs";

/// A flat string/boolean store for a single scope.
///
/// Writes are synchronous: when `set_*` returns `Ok`, the value has reached
/// local storage.
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, key: &str, default: &str) -> String;

    fn get_bool(&self, key: &str, default: bool) -> bool;

    fn set_string(&self, key: &str, value: &str) -> Result<()>;

    fn set_bool(&self, key: &str, value: bool) -> Result<()>;

    /// Writes several string values in one transaction.
    fn set_strings(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set_string(key, value)?;
        }
        Ok(())
    }

    /// Removes every key in the scope.
    fn clear(&self) -> Result<()>;
}
