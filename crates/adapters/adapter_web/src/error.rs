//! Browser adapter error types.

use std::error::Error;

use themeswitch_app::config::ConfigError;
use themeswitch_domain::error::ThemeSwitchError;
use wasm_bindgen::JsValue;

/// A JavaScript exception or rejected call, reduced to its message.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct JsError {
    message: String,
}

impl JsError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap as a storage failure for the port boundary.
    #[must_use]
    pub fn into_storage(self) -> ThemeSwitchError {
        ThemeSwitchError::Storage(Box::new(self))
    }

    /// Wrap as a document failure for the port boundary.
    #[must_use]
    pub fn into_dom(self) -> ThemeSwitchError {
        ThemeSwitchError::Dom(Box::new(self))
    }

    /// Wrap as a media-query failure for the port boundary.
    #[must_use]
    pub fn into_media_query(self) -> ThemeSwitchError {
        ThemeSwitchError::MediaQuery(Box::new(self))
    }
}

impl From<JsValue> for JsError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self { message }
    }
}

/// Errors raised while mounting the toggle in a page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Not running in a browser window (worker, server, test harness).
    #[error("no global window")]
    NoWindow,

    /// The window has no document or the document has no root element.
    #[error("no document root element")]
    NoDocument,

    /// `localStorage` is disabled for this origin.
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// `matchMedia` returned no list for the configured query.
    #[error("media query {0:?} not supported")]
    UnsupportedQuery(String),

    /// A DOM call threw.
    #[error("javascript error")]
    Js(#[from] JsError),

    /// The configuration could not be used.
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// A controller operation failed.
    #[error("theme controller error")]
    Controller(#[from] ThemeSwitchError),
}

impl WebError {
    /// Message including every source in the chain, for the JS console.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            out.push_str(": ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.report())
    }
}
