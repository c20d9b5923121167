//! Theme surface port — the document theme marker and the toggle's icons.

use std::rc::Rc;

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::icon::{Icon, IconDisplay};
use themeswitch_domain::theme::Theme;

/// The visible side of the toggle: one marker on the document root and two
/// icons inside the toggle control.
pub trait ThemeSurface {
    /// Current raw marker value, `None` when unset.
    fn marker(&self) -> Option<String>;

    /// Write the document theme marker.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Dom`] when the attribute cannot be set.
    fn set_marker(&self, theme: Theme) -> Result<(), ThemeSwitchError>;

    /// Set the inline display of one icon.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Dom`] when the style cannot be set.
    fn set_icon(&self, icon: Icon, display: IconDisplay) -> Result<(), ThemeSwitchError>;
}

impl<T: ThemeSurface> ThemeSurface for Rc<T> {
    fn marker(&self) -> Option<String> {
        (**self).marker()
    }

    fn set_marker(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        (**self).set_marker(theme)
    }

    fn set_icon(&self, icon: Icon, display: IconDisplay) -> Result<(), ThemeSwitchError> {
        (**self).set_icon(icon, display)
    }
}
