//! In-memory preference store.

use std::cell::RefCell;
use std::collections::HashMap;

use themeswitch_app::ports::PreferenceStore;
use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::theme::Theme;

/// Error returned by a read-only [`MemoryPreferenceStore`] on write.
#[derive(Debug, thiserror::Error)]
#[error("storage is read-only")]
pub struct ReadOnlyStorage;

/// Preference store backed by a `HashMap`; reads and writes a single key.
#[derive(Debug)]
pub struct MemoryPreferenceStore {
    key: String,
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryPreferenceStore {
    /// Empty store using `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: RefCell::new(HashMap::new()),
            read_only: false,
        }
    }

    /// Pre-populate the store's key with raw text (not necessarily a theme).
    #[must_use]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(self.key.clone(), value.into());
        self
    }

    /// Reject every subsequent write with [`ThemeSwitchError::Storage`].
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw value currently stored under the key.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.entries.borrow().get(&self.key).cloned()
    }

    /// Snapshot of the whole map.
    #[must_use]
    pub fn entries(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, ThemeSwitchError> {
        Ok(self.value())
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        if self.read_only {
            tracing::warn!(key = %self.key, %theme, "rejecting write to read-only store");
            return Err(ThemeSwitchError::Storage(Box::new(ReadOnlyStorage)));
        }
        self.entries
            .borrow_mut()
            .insert(self.key.clone(), theme.to_string());
        Ok(())
    }
}
