//! Effective-theme resolution: a stored choice beats the system signal.

use std::fmt;

use crate::theme::Theme;

/// Where an effective theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// An explicit, persisted user choice.
    Stored,
    /// The operating environment's color-scheme preference.
    System,
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored => f.write_str("stored"),
            Self::System => f.write_str("system"),
        }
    }
}

/// The effective theme together with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub theme: Theme,
    pub source: ThemeSource,
}

impl Resolution {
    /// Apply the precedence rule. `system` is only consulted when nothing is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `system`, if it is consulted and fails.
    pub fn resolve<E>(
        stored: Option<Theme>,
        system: impl FnOnce() -> Result<Theme, E>,
    ) -> Result<Self, E> {
        match stored {
            Some(theme) => Ok(Self {
                theme,
                source: ThemeSource::Stored,
            }),
            None => Ok(Self {
                theme: system()?,
                source: ThemeSource::System,
            }),
        }
    }

    #[must_use]
    pub const fn is_explicit(self) -> bool {
        matches!(self.source, ThemeSource::Stored)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn should_prefer_stored_theme_over_system() {
        let res =
            Resolution::resolve::<Infallible>(Some(Theme::Light), || Ok(Theme::Dark)).unwrap();
        assert_eq!(res.theme, Theme::Light);
        assert_eq!(res.source, ThemeSource::Stored);
        assert!(res.is_explicit());
    }

    #[test]
    fn should_fall_back_to_system_when_nothing_stored() {
        let res = Resolution::resolve::<Infallible>(None, || Ok(Theme::Dark)).unwrap();
        assert_eq!(res.theme, Theme::Dark);
        assert_eq!(res.source, ThemeSource::System);
        assert!(!res.is_explicit());
    }

    #[test]
    fn should_not_query_system_when_stored() {
        let res = Resolution::resolve(Some(Theme::Dark), || Err("system queried"));
        assert_eq!(res.unwrap().theme, Theme::Dark);
    }

    #[test]
    fn should_propagate_system_query_failure() {
        let res = Resolution::resolve(None, || Err("media query unavailable"));
        assert_eq!(res, Err("media query unavailable"));
    }
}
