use fynd_core::error::Result;
use fynd_core::preference::PreferenceStore;
use std::sync::{Arc, PoisonError, RwLock};

const KEY_DARK_THEME: &str = "dark_theme";

/// Dark-mode flag, defaulting to light.
pub struct ThemePreference {
    store: Arc<dyn PreferenceStore>,
    dark: RwLock<bool>,
}

impl ThemePreference {
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let dark = store.get_bool(KEY_DARK_THEME, false);
        Self {
            store,
            dark: RwLock::new(dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        *self.dark.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_dark(&self, dark: bool) -> Result<()> {
        let mut current = self.dark.write().unwrap_or_else(PoisonError::into_inner);
        self.store.set_bool(KEY_DARK_THEME, dark)?;
        *current = dark;
        Ok(())
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> Result<bool> {
        let mut current = self.dark.write().unwrap_or_else(PoisonError::into_inner);
        let next = !*current;
        self.store.set_bool(KEY_DARK_THEME, next)?;
        *current = next;
        Ok(next)
    }
}
