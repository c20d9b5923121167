//! Theme controller — keeps the stored choice, the OS signal, the document
//! marker and the toggle icons consistent.

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::icon::{Icon, IconState};
use themeswitch_domain::resolution::Resolution;
use themeswitch_domain::theme::Theme;

use crate::ports::{PreferenceStore, SystemPreference, ThemeSurface};

/// Application service behind a light/dark toggle control.
///
/// An explicit choice, once stored, always wins over the system signal and is
/// never cleared here. Every state-changing operation leaves the marker and
/// the icons in agreement before it returns.
pub struct ThemePreferenceController<S, Q, D> {
    store: S,
    system: Q,
    surface: D,
}

impl<S, Q, D> ThemePreferenceController<S, Q, D>
where
    S: PreferenceStore,
    Q: SystemPreference,
    D: ThemeSurface,
{
    /// Create a controller over the given ports. Nothing is read or written
    /// until [`initialize`](Self::initialize) is called.
    pub fn new(store: S, system: Q, surface: D) -> Self {
        Self {
            store,
            system,
            surface,
        }
    }

    /// Show the effective theme on the page without recording a choice.
    ///
    /// # Errors
    ///
    /// Propagates port failures.
    pub fn initialize(&self) -> Result<Resolution, ThemeSwitchError> {
        let resolution = self.resolve()?;
        tracing::debug!(
            theme = %resolution.theme,
            source = %resolution.source,
            "initializing theme"
        );
        self.show(resolution.theme)?;
        Ok(resolution)
    }

    /// The explicit stored choice, if any. Stored text that is not a theme
    /// counts as no choice.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Storage`] when storage cannot be read.
    pub fn stored_preference(&self) -> Result<Option<Theme>, ThemeSwitchError> {
        let Some(raw) = self.store.load()? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring stored theme preference");
                Ok(None)
            }
        }
    }

    /// Theme derived from the current system signal.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::MediaQuery`] when the query fails.
    pub fn system_theme(&self) -> Result<Theme, ThemeSwitchError> {
        self.system.prefers_light().map(Theme::from_prefers_light)
    }

    /// Effective theme with the source it came from. No side effects.
    ///
    /// # Errors
    ///
    /// Propagates storage or media-query failures.
    pub fn resolve(&self) -> Result<Resolution, ThemeSwitchError> {
        Resolution::resolve(self.stored_preference()?, || self.system_theme())
    }

    /// Effective theme: the stored choice, else the system preference.
    ///
    /// # Errors
    ///
    /// Propagates storage or media-query failures.
    pub fn resolve_theme(&self) -> Result<Theme, ThemeSwitchError> {
        self.resolve().map(|res| res.theme)
    }

    /// Make `theme` the explicit choice: marker, then storage, then icons.
    ///
    /// This is the only operation that writes the stored preference.
    ///
    /// # Errors
    ///
    /// Propagates port failures. A failed storage write is reported only
    /// after the icons are synced, so marker and icons still agree.
    pub fn apply_theme(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        tracing::debug!(%theme, "applying theme");
        self.surface.set_marker(theme)?;
        let saved = self.store.save(theme);
        self.sync_icon(theme)?;
        saved
    }

    /// Show the icon that switches away from `theme` and hide the other.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Dom`] when an icon cannot be styled.
    pub fn sync_icon(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        let state = IconState::for_theme(theme);
        for icon in Icon::ALL {
            self.surface.set_icon(icon, state.display(icon))?;
        }
        Ok(())
    }

    /// Handle activation of the toggle control. Returns the applied theme.
    ///
    /// An unset or unrecognised marker counts as light.
    ///
    /// # Errors
    ///
    /// Propagates port failures.
    pub fn on_toggle(&self) -> Result<Theme, ThemeSwitchError> {
        let current = self.surface.marker().and_then(|raw| raw.parse().ok());
        let next = Theme::toggled_from(current);
        tracing::debug!(?current, %next, "toggle activated");
        self.apply_theme(next)?;
        Ok(next)
    }

    /// Handle a change of the system signal.
    ///
    /// Follows the signal only while no explicit choice is stored, and never
    /// stores one itself. Returns the theme shown, or `None` when the event
    /// was ignored.
    ///
    /// # Errors
    ///
    /// Propagates port failures.
    pub fn on_system_change(
        &self,
        prefers_light: bool,
    ) -> Result<Option<Theme>, ThemeSwitchError> {
        if let Some(stored) = self.stored_preference()? {
            tracing::debug!(%stored, prefers_light, "system change ignored");
            return Ok(None);
        }
        let theme = Theme::from_prefers_light(prefers_light);
        tracing::debug!(%theme, "following system color scheme");
        self.show(theme)?;
        Ok(Some(theme))
    }

    /// Write marker and icons, leaving storage alone.
    fn show(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        self.surface.set_marker(theme)?;
        self.sync_icon(theme)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use themeswitch_domain::icon::IconDisplay;
    use themeswitch_domain::resolution::ThemeSource;

    use super::*;

    #[derive(Default)]
    struct FakeStore {
        value: RefCell<Option<String>>,
        reject_writes: bool,
    }

    impl PreferenceStore for FakeStore {
        fn load(&self) -> Result<Option<String>, ThemeSwitchError> {
            Ok(self.value.borrow().clone())
        }

        fn save(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
            if self.reject_writes {
                return Err(ThemeSwitchError::Storage("quota exceeded".into()));
            }
            *self.value.borrow_mut() = Some(theme.to_string());
            Ok(())
        }
    }

    struct FakeSystem(Cell<bool>);

    impl SystemPreference for FakeSystem {
        fn prefers_light(&self) -> Result<bool, ThemeSwitchError> {
            Ok(self.0.get())
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        marker: RefCell<Option<String>>,
        sun: Cell<Option<IconDisplay>>,
        moon: Cell<Option<IconDisplay>>,
    }

    impl ThemeSurface for FakeSurface {
        fn marker(&self) -> Option<String> {
            self.marker.borrow().clone()
        }

        fn set_marker(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
            *self.marker.borrow_mut() = Some(theme.to_string());
            Ok(())
        }

        fn set_icon(&self, icon: Icon, display: IconDisplay) -> Result<(), ThemeSwitchError> {
            match icon {
                Icon::Sun => self.sun.set(Some(display)),
                Icon::Moon => self.moon.set(Some(display)),
            }
            Ok(())
        }
    }

    type Controller = ThemePreferenceController<FakeStore, FakeSystem, FakeSurface>;

    fn make_controller(stored: Option<&str>, prefers_light: bool) -> Controller {
        let store = FakeStore {
            value: RefCell::new(stored.map(str::to_string)),
            reject_writes: false,
        };
        ThemePreferenceController::new(
            store,
            FakeSystem(Cell::new(prefers_light)),
            FakeSurface::default(),
        )
    }

    fn stored(ctrl: &Controller) -> Option<String> {
        ctrl.store.value.borrow().clone()
    }

    fn marker(ctrl: &Controller) -> Option<String> {
        ctrl.surface.marker()
    }

    fn icons(ctrl: &Controller) -> (Option<IconDisplay>, Option<IconDisplay>) {
        (ctrl.surface.sun.get(), ctrl.surface.moon.get())
    }

    #[test]
    fn should_resolve_light_from_system_when_nothing_stored() {
        let ctrl = make_controller(None, true);
        assert_eq!(ctrl.resolve_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn should_resolve_dark_from_system_when_nothing_stored() {
        let ctrl = make_controller(None, false);
        let res = ctrl.resolve().unwrap();
        assert_eq!(res.theme, Theme::Dark);
        assert_eq!(res.source, ThemeSource::System);
    }

    #[test]
    fn should_resolve_stored_choice_regardless_of_system() {
        for prefers_light in [true, false] {
            let ctrl = make_controller(Some("dark"), prefers_light);
            assert_eq!(ctrl.resolve_theme().unwrap(), Theme::Dark);
            let ctrl = make_controller(Some("light"), prefers_light);
            assert_eq!(ctrl.resolve_theme().unwrap(), Theme::Light);
        }
    }

    #[test]
    fn should_not_write_anything_when_resolving() {
        let ctrl = make_controller(None, true);
        ctrl.resolve_theme().unwrap();
        assert_eq!(stored(&ctrl), None);
        assert_eq!(marker(&ctrl), None);
        assert_eq!(icons(&ctrl), (None, None));
    }

    #[test]
    fn should_treat_unparseable_stored_value_as_absent() {
        let ctrl = make_controller(Some("sepia"), true);
        assert_eq!(ctrl.stored_preference().unwrap(), None);
        assert_eq!(ctrl.resolve_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn should_initialize_marker_and_icon_without_storing() {
        let ctrl = make_controller(None, false);
        let res = ctrl.initialize().unwrap();

        assert_eq!(res.theme, Theme::Dark);
        assert_eq!(marker(&ctrl).as_deref(), Some("dark"));
        assert_eq!(icons(&ctrl), (Some(IconDisplay::Block), Some(IconDisplay::None)));
        assert_eq!(stored(&ctrl), None);
    }

    #[test]
    fn should_initialize_from_stored_choice() {
        let ctrl = make_controller(Some("light"), false);
        let res = ctrl.initialize().unwrap();
        assert!(res.is_explicit());
        assert_eq!(marker(&ctrl).as_deref(), Some("light"));
        assert_eq!(icons(&ctrl), (Some(IconDisplay::None), Some(IconDisplay::Block)));
    }

    #[test]
    fn should_write_marker_storage_and_icons_when_applying() {
        let ctrl = make_controller(None, true);
        ctrl.apply_theme(Theme::Dark).unwrap();

        assert_eq!(marker(&ctrl).as_deref(), Some("dark"));
        assert_eq!(stored(&ctrl).as_deref(), Some("dark"));
        assert_eq!(icons(&ctrl), (Some(IconDisplay::Block), Some(IconDisplay::None)));
    }

    #[test]
    fn should_leave_same_icons_when_syncing_twice() {
        let ctrl = make_controller(None, true);
        ctrl.surface.sun.set(Some(IconDisplay::None));
        ctrl.surface.moon.set(Some(IconDisplay::Block));

        ctrl.sync_icon(Theme::Dark).unwrap();
        ctrl.sync_icon(Theme::Dark).unwrap();

        assert_eq!(icons(&ctrl), (Some(IconDisplay::Block), Some(IconDisplay::None)));
    }

    #[test]
    fn should_invert_marker_and_store_it_on_toggle() {
        let ctrl = make_controller(None, true);
        ctrl.initialize().unwrap();

        assert_eq!(ctrl.on_toggle().unwrap(), Theme::Dark);
        assert_eq!(marker(&ctrl).as_deref(), Some("dark"));
        assert_eq!(stored(&ctrl).as_deref(), Some("dark"));

        assert_eq!(ctrl.on_toggle().unwrap(), Theme::Light);
        assert_eq!(marker(&ctrl).as_deref(), Some("light"));
        assert_eq!(stored(&ctrl).as_deref(), Some("light"));
    }

    #[test]
    fn should_toggle_unset_marker_to_dark() {
        let ctrl = make_controller(None, false);
        assert_eq!(ctrl.on_toggle().unwrap(), Theme::Dark);
        assert_eq!(marker(&ctrl).as_deref(), Some("dark"));
    }

    #[test]
    fn should_toggle_unrecognised_marker_to_dark() {
        let ctrl = make_controller(None, false);
        *ctrl.surface.marker.borrow_mut() = Some("auto".to_string());
        assert_eq!(ctrl.on_toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn should_follow_system_change_when_nothing_stored() {
        let ctrl = make_controller(None, false);
        ctrl.initialize().unwrap();

        assert_eq!(ctrl.on_system_change(true).unwrap(), Some(Theme::Light));
        assert_eq!(marker(&ctrl).as_deref(), Some("light"));
        assert_eq!(icons(&ctrl), (Some(IconDisplay::None), Some(IconDisplay::Block)));
        assert_eq!(stored(&ctrl), None);
    }

    #[test]
    fn should_ignore_system_change_when_choice_stored() {
        let ctrl = make_controller(Some("dark"), false);
        ctrl.initialize().unwrap();

        assert_eq!(ctrl.on_system_change(true).unwrap(), None);
        assert_eq!(marker(&ctrl).as_deref(), Some("dark"));
        assert_eq!(stored(&ctrl).as_deref(), Some("dark"));
        assert_eq!(icons(&ctrl), (Some(IconDisplay::Block), Some(IconDisplay::None)));
    }

    #[test]
    fn should_propagate_storage_write_failure() {
        let ctrl = ThemePreferenceController::new(
            FakeStore {
                value: RefCell::new(None),
                reject_writes: true,
            },
            FakeSystem(Cell::new(true)),
            FakeSurface::default(),
        );

        let result = ctrl.on_toggle();
        assert!(matches!(result, Err(ThemeSwitchError::Storage(_))));
        assert_eq!(ctrl.store.value.borrow().clone(), None);
    }

    #[test]
    fn should_keep_icons_in_sync_with_marker_when_storage_write_fails() {
        let ctrl = ThemePreferenceController::new(
            FakeStore {
                value: RefCell::new(None),
                reject_writes: true,
            },
            FakeSystem(Cell::new(true)),
            FakeSurface::default(),
        );
        ctrl.initialize().unwrap();

        assert!(ctrl.on_toggle().is_err());
        assert_eq!(marker(&ctrl).as_deref(), Some("dark"));
        assert_eq!(icons(&ctrl), (Some(IconDisplay::Block), Some(IconDisplay::None)));
    }
}
