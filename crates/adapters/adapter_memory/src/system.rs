//! Scripted system color-scheme preference.

use std::cell::Cell;

use themeswitch_app::ports::SystemPreference;
use themeswitch_domain::error::ThemeSwitchError;

/// A "prefers light" signal the caller flips by hand.
#[derive(Debug, Default)]
pub struct ScriptedSystemPreference {
    prefers_light: Cell<bool>,
}

impl ScriptedSystemPreference {
    #[must_use]
    pub fn new(prefers_light: bool) -> Self {
        Self {
            prefers_light: Cell::new(prefers_light),
        }
    }

    /// Change the signal. Returns the new value so it can be forwarded to
    /// the controller's change handler, as a browser `change` event would.
    pub fn set(&self, prefers_light: bool) -> bool {
        self.prefers_light.set(prefers_light);
        prefers_light
    }
}

impl SystemPreference for ScriptedSystemPreference {
    fn prefers_light(&self) -> Result<bool, ThemeSwitchError> {
        Ok(self.prefers_light.get())
    }
}
