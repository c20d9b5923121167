//! Recording theme surface.

use std::cell::{Cell, RefCell};

use themeswitch_app::ports::ThemeSurface;
use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::icon::{Icon, IconDisplay};
use themeswitch_domain::theme::Theme;

/// Stand-in for the document root and the toggle's two icons.
///
/// Icons start with no inline display (`None`), like freshly parsed markup.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    marker: RefCell<Option<String>>,
    sun: Cell<Option<IconDisplay>>,
    moon: Cell<Option<IconDisplay>>,
    marker_writes: Cell<usize>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw marker value already on the root, as if set by
    /// page markup.
    #[must_use]
    pub fn with_marker(self, raw: impl Into<String>) -> Self {
        *self.marker.borrow_mut() = Some(raw.into());
        self
    }

    /// Inline display currently set on `icon`.
    #[must_use]
    pub fn icon(&self, icon: Icon) -> Option<IconDisplay> {
        match icon {
            Icon::Sun => self.sun.get(),
            Icon::Moon => self.moon.get(),
        }
    }

    /// Icons whose display is [`IconDisplay::Block`].
    #[must_use]
    pub fn visible_icons(&self) -> Vec<Icon> {
        Icon::ALL
            .into_iter()
            .filter(|icon| self.icon(*icon).is_some_and(IconDisplay::is_visible))
            .collect()
    }

    /// How many times the marker has been written.
    #[must_use]
    pub fn marker_writes(&self) -> usize {
        self.marker_writes.get()
    }
}

impl ThemeSurface for RecordingSurface {
    fn marker(&self) -> Option<String> {
        self.marker.borrow().clone()
    }

    fn set_marker(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        *self.marker.borrow_mut() = Some(theme.to_string());
        self.marker_writes.set(self.marker_writes.get() + 1);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unmarked_with_unstyled_icons() {
        let surface = RecordingSurface::new();
        assert_eq!(surface.marker(), None);
        assert_eq!(surface.icon(Icon::Sun), None);
        assert!(surface.visible_icons().is_empty());
    }

    #[test]
    fn should_record_marker_writes() {
        let surface = RecordingSurface::new().with_marker("light");
        surface.set_marker(Theme::Dark).unwrap();
        assert_eq!(surface.marker().as_deref(), Some("dark"));
        assert_eq!(surface.marker_writes(), 1);
    }

    #[test]
    fn should_report_visible_icons() {
        let surface = RecordingSurface::new();
        surface.set_icon(Icon::Sun, IconDisplay::None).unwrap();
        surface.set_icon(Icon::Moon, IconDisplay::Block).unwrap();
        assert_eq!(surface.visible_icons(), vec![Icon::Moon]);
    }
}
