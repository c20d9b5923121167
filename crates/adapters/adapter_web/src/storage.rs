//! `localStorage`-backed preference store.

use themeswitch_app::ports::PreferenceStore;
use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::theme::Theme;
use web_sys::{Storage, Window};

use crate::error::{JsError, WebError};

/// Persists the explicit choice in `window.localStorage` under one key.
pub struct LocalStorageStore {
    storage: Storage,
    key: String,
}

impl LocalStorageStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::StorageUnavailable`] when the origin has no local
    /// storage, or [`WebError::Js`] when accessing it throws (sandboxed
    /// frames, disabled cookies).
    pub fn open(window: &Window, key: impl Into<String>) -> Result<Self, WebError> {
        let storage = window
            .local_storage()
            .map_err(JsError::from)?
            .ok_or(WebError::StorageUnavailable)?;
        Ok(Self {
            storage,
            key: key.into(),
        })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, ThemeSwitchError> {
        self.storage
            .get_item(&self.key)
            .map_err(|err| JsError::from(err).into_storage())
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        tracing::debug!(key = %self.key, %theme, "persisting theme");
        self.storage
            .set_item(&self.key, theme.as_str())
            .map_err(|err| JsError::from(err).into_storage())
    }
}
