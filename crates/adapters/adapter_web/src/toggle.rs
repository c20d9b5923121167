//! Mounting the controller into a page: listener wiring and teardown.

use std::rc::Rc;

use themeswitch_app::config::ThemeConfig;
use themeswitch_app::services::theme_controller::ThemePreferenceController;
use themeswitch_domain::resolution::Resolution;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, MediaQueryList, MediaQueryListEvent};

use crate::error::{JsError, WebError};
use crate::media::MediaQueryPreference;
use crate::storage::LocalStorageStore;
use crate::surface::DomThemeSurface;

/// Controller wired to the browser adapters.
pub type WebThemeController =
    ThemePreferenceController<LocalStorageStore, MediaQueryPreference, DomThemeSurface>;

/// A mounted toggle. Dropping it removes both listeners.
///
/// The controller is shared by the two listener closures and lives as long
/// as they do.
pub struct ThemeToggle {
    resolution: Resolution,
    toggle: Element,
    media: MediaQueryList,
    on_click: Closure<dyn FnMut(Event)>,
    on_change: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl ThemeToggle {
    /// Find the toggle control, show the effective theme and start listening
    /// for clicks and color-scheme changes.
    ///
    /// Returns `Ok(None)` without touching the page when the toggle control
    /// is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`WebError`] when the browser APIs are unavailable, the
    /// configuration (after per-element overrides) is invalid, or the
    /// initial theme cannot be shown.
    pub fn mount(config: &ThemeConfig) -> Result<Option<Self>, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let Some(toggle) = document
            .query_selector(&config.toggle_selector)
            .map_err(JsError::from)?
        else {
            tracing::debug!(selector = %config.toggle_selector, "no toggle control on page");
            return Ok(None);
        };

        let mut config = config.clone();
        config.apply_overrides(|key| toggle.get_attribute(&format!("data-{key}")));
        config.validate()?;

        let root = document.document_element().ok_or(WebError::NoDocument)?;
        let store = LocalStorageStore::open(&window, config.storage_key.as_str())?;
        let system = MediaQueryPreference::open(&window, &config.light_query)?;
        let media = system.list().clone();
        let surface = DomThemeSurface::locate(root, &toggle, &config)?;

        let controller: Rc<WebThemeController> =
            Rc::new(ThemePreferenceController::new(store, system, surface));
        let resolution = controller.initialize()?;

        let on_click = {
            let controller = Rc::clone(&controller);
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                if let Err(err) = controller.on_toggle() {
                    tracing::error!(
                        error = %WebError::from(err).report(),
                        "theme toggle failed"
                    );
                }
            })
        };
        let on_change = {
            let controller = Rc::clone(&controller);
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                if let Err(err) = controller.on_system_change(event.matches()) {
                    tracing::error!(
                        error = %WebError::from(err).report(),
                        "color-scheme change failed"
                    );
                }
            })
        };

        toggle
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(JsError::from)?;
        if let Err(err) = media
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            // Leave no half-mounted toggle behind.
            let _ = toggle
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            return Err(JsError::from(err).into());
        }

        Ok(Some(Self {
            resolution,
            toggle,
            media,
            on_click,
            on_change,
        }))
    }

    /// Effective theme shown when the toggle was mounted.
    #[must_use]
    pub fn initial(&self) -> Resolution {
        self.resolution
    }

    /// Remove both listeners. Equivalent to dropping the handle.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for ThemeToggle {
    fn drop(&mut self) {
        if let Err(err) = self
            .toggle
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %JsError::from(err), "failed to remove click listener");
        }
        if let Err(err) = self
            .media
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %JsError::from(err), "failed to remove change listener");
        }
        tracing::debug!("theme toggle unmounted");
    }
}
