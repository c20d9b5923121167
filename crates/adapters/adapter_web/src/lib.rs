//! # themeswitch-adapter-web
//!
//! Browser adapters for the theme ports and the wasm entry points.
//!
//! ## Provided adapters
//!
//! | Adapter | Port | Backed by |
//! |---------|------|-----------|
//! | [`LocalStorageStore`] | `PreferenceStore` | `window.localStorage` |
//! | [`MediaQueryPreference`] | `SystemPreference` | `window.matchMedia(query)` |
//! | [`DomThemeSurface`] | `ThemeSurface` | root attribute + icon inline styles |
//!
//! [`ThemeToggle`] mounts a controller over these adapters and owns the
//! `click` and `change` listeners.
//!
//! ## Page contract
//!
//! ```html
//! <html data-theme="dark">
//!   <button class="theme-toggle" data-storage-key="theme">
//!     <svg class="sun-icon">…</svg>
//!     <svg class="moon-icon">…</svg>
//!   </button>
//! </html>
//! ```
//!
//! ## Entry points
//!
//! - `start` runs when the module is instantiated and mounts with the
//!   default configuration for the lifetime of the page.
//! - `remount(json)` replaces the mounted toggle using a JSON configuration.
//! - `unmount()` removes the listeners.
//!
//! ## Dependency rule
//!
//! Depends on `themeswitch-app` (port traits) and `themeswitch-domain` only.

pub mod error;
pub mod logging;
pub mod media;
pub mod storage;
pub mod surface;
pub mod toggle;

use std::cell::RefCell;

use themeswitch_app::config::ThemeConfig;
use wasm_bindgen::prelude::*;

pub use error::{JsError, WebError};
pub use media::MediaQueryPreference;
pub use storage::LocalStorageStore;
pub use surface::DomThemeSurface;
pub use toggle::{ThemeToggle, WebThemeController};

thread_local! {
    static MOUNTED: RefCell<Option<ThemeToggle>> = const { RefCell::new(None) };
}

/// Module start: install logging and mount with the default configuration.
///
/// # Errors
///
/// Throws the error report when mounting fails; a page without a
/// toggle control is not an error.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();
    mount(&ThemeConfig::default())?;
    Ok(())
}

/// Tear down the current toggle and mount again from a JSON configuration.
/// Returns whether a toggle control was found.
///
/// # Errors
///
/// Throws the error report when the configuration is invalid or
/// mounting fails. The previous toggle is already removed at that point.
#[wasm_bindgen]
pub fn remount(config: &str) -> Result<bool, JsValue> {
    let config = ThemeConfig::from_json(config).map_err(WebError::from)?;
    unmount();
    mount(&config).map_err(JsValue::from)
}

/// Remove the toggle's listeners, if mounted. The page keeps its current
/// theme.
#[wasm_bindgen]
pub fn unmount() {
    let previous = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if let Some(toggle) = previous {
        toggle.teardown();
    }
}

fn mount(config: &ThemeConfig) -> Result<bool, WebError> {
    logging::set_level(&config.log_level);
    let toggle = ThemeToggle::mount(config)?;
    if let Some(mounted) = &toggle {
        let initial = mounted.initial();
        tracing::info!(
            theme = %initial.theme,
            source = %initial.source,
            "theme toggle mounted"
        );
    }
    let found = toggle.is_some();
    MOUNTED.with(|mounted| *mounted.borrow_mut() = toggle);
    Ok(found)
}
