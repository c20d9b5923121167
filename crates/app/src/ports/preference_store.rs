//! Preference storage port — durable key-value storage of the user's choice.

use std::rc::Rc;

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::theme::Theme;

/// Persists the explicit theme choice under a single key owned by the adapter.
pub trait PreferenceStore {
    /// Raw stored value, or `None` when the user never chose a theme.
    ///
    /// The value is returned unparsed so callers can tell "absent" from
    /// "present but not a theme".
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Storage`] when the storage cannot be read.
    fn load(&self) -> Result<Option<String>, ThemeSwitchError>;

    /// Overwrite the stored choice.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Storage`] when the write is rejected.
    fn save(&self, theme: Theme) -> Result<(), ThemeSwitchError>;
}

impl<T: PreferenceStore> PreferenceStore for Rc<T> {
    fn load(&self) -> Result<Option<String>, ThemeSwitchError> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        (**self).save(theme)
    }
}
