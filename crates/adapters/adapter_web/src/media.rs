//! `matchMedia`-backed system color-scheme preference.

use themeswitch_app::ports::SystemPreference;
use themeswitch_domain::error::ThemeSwitchError;
use web_sys::{MediaQueryList, Window};

use crate::error::{JsError, WebError};

/// Reads "prefers light" from a live `MediaQueryList`.
///
/// The same list is the event target for change notifications, see
/// [`list`](Self::list).
#[derive(Clone)]
pub struct MediaQueryPreference {
    list: MediaQueryList,
}

impl MediaQueryPreference {
    /// Evaluate `query` against the window.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::UnsupportedQuery`] when the browser yields no list,
    /// or [`WebError::Js`] when `matchMedia` throws.
    pub fn open(window: &Window, query: &str) -> Result<Self, WebError> {
        let list = window
            .match_media(query)
            .map_err(JsError::from)?
            .ok_or_else(|| WebError::UnsupportedQuery(query.to_string()))?;
        Ok(Self { list })
    }

    #[must_use]
    pub fn list(&self) -> &MediaQueryList {
        &self.list
    }
}

impl SystemPreference for MediaQueryPreference {
    fn prefers_light(&self) -> Result<bool, ThemeSwitchError> {
        Ok(self.list.matches())
    }
}
