//! System preference port — the OS-reported color scheme.

use std::rc::Rc;

use themeswitch_domain::error::ThemeSwitchError;

/// Answers "does the environment prefer a light color scheme right now?".
///
/// Change notifications are wired by the adapter that mounts the controller;
/// it forwards the new boolean to
/// [`ThemePreferenceController::on_system_change`](crate::services::theme_controller::ThemePreferenceController::on_system_change).
pub trait SystemPreference {
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::MediaQuery`] when the query cannot be
    /// evaluated.
    fn prefers_light(&self) -> Result<bool, ThemeSwitchError>;
}

impl<T: SystemPreference> SystemPreference for Rc<T> {
    fn prefers_light(&self) -> Result<bool, ThemeSwitchError> {
        (**self).prefers_light()
    }
}
