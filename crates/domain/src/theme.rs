//! Theme — the visual mode applied to the page.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseThemeError;

/// One of the two visual modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Lowercase literal used in storage and on the document root.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map the "prefers light" color-scheme signal onto a theme.
    #[must_use]
    pub const fn from_prefers_light(prefers_light: bool) -> Self {
        if prefers_light { Self::Light } else { Self::Dark }
    }

    /// Theme a toggle switches to, given the theme currently on the page.
    ///
    /// An unset current theme counts as light, so the first toggle on an
    /// unmarked page always lands on dark.
    #[must_use]
    pub fn toggled_from(current: Option<Self>) -> Self {
        current.unwrap_or(Self::Light).inverse()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_invert_light_to_dark() {
        assert_eq!(Theme::Light.inverse(), Theme::Dark);
    }

    #[test]
    fn should_invert_dark_to_light() {
        assert_eq!(Theme::Dark.inverse(), Theme::Light);
    }

    #[test]
    fn should_map_prefers_light_signal() {
        assert_eq!(Theme::from_prefers_light(true), Theme::Light);
        assert_eq!(Theme::from_prefers_light(false), Theme::Dark);
    }

    #[test]
    fn should_toggle_unset_theme_to_dark() {
        assert_eq!(Theme::toggled_from(None), Theme::Dark);
    }

    #[test]
    fn should_toggle_set_theme_to_its_inverse() {
        assert_eq!(Theme::toggled_from(Some(Theme::Dark)), Theme::Light);
        assert_eq!(Theme::toggled_from(Some(Theme::Light)), Theme::Dark);
    }

    #[test]
    fn should_parse_lowercase_literals() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn should_reject_unknown_or_mixed_case_text() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert_eq!(err.value, "Dark");
        assert!("".parse::<Theme>().is_err());
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
