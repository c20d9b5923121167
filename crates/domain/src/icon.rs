//! Icon visibility — which of the sun / moon affordances a theme shows.
//!
//! The icon advertises the theme the toggle switches *to*: a dark page shows
//! the sun, a light page shows the moon.

use std::fmt;

use crate::theme::Theme;

/// One of the two icon markers inside the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    /// Both icons, sun first.
    pub const ALL: [Self; 2] = [Self::Sun, Self::Moon];
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sun => f.write_str("sun"),
            Self::Moon => f.write_str("moon"),
        }
    }
}

/// Inline `display` value applied to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconDisplay {
    Block,
    None,
}

impl IconDisplay {
    /// CSS value for the `display` property.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Block)
    }
}

impl fmt::Display for IconDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Visibility of both icons for a given theme. Exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconState {
    pub sun: IconDisplay,
    pub moon: IconDisplay,
}

impl IconState {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                sun: IconDisplay::Block,
                moon: IconDisplay::None,
            },
            Theme::Light => Self {
                sun: IconDisplay::None,
                moon: IconDisplay::Block,
            },
        }
    }

    /// Display value for a single icon.
    #[must_use]
    pub const fn display(self, icon: Icon) -> IconDisplay {
        match icon {
            Icon::Sun => self.sun,
            Icon::Moon => self.moon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_sun_and_hide_moon_when_dark() {
        let state = IconState::for_theme(Theme::Dark);
        assert_eq!(state.sun, IconDisplay::Block);
        assert_eq!(state.moon, IconDisplay::None);
    }

    #[test]
    fn should_show_moon_and_hide_sun_when_light() {
        let state = IconState::for_theme(Theme::Light);
        assert_eq!(state.sun, IconDisplay::None);
        assert_eq!(state.moon, IconDisplay::Block);
    }

    #[test]
    fn should_keep_exactly_one_icon_visible() {
        for theme in [Theme::Light, Theme::Dark] {
            let state = IconState::for_theme(theme);
            let visible = Icon::ALL
                .iter()
                .filter(|icon| state.display(**icon).is_visible())
                .count();
            assert_eq!(visible, 1, "theme {theme}");
        }
    }

    #[test]
    fn should_render_css_display_values() {
        assert_eq!(IconDisplay::Block.as_css(), "block");
        assert_eq!(IconDisplay::None.to_string(), "none");
    }

    #[test]
    fn should_display_icon_names() {
        assert_eq!(Icon::Sun.to_string(), "sun");
        assert_eq!(Icon::Moon.to_string(), "moon");
    }
}
