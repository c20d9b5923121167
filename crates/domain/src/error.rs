//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ThemeSwitchError`] at the port boundary.

/// Boxed source error carried across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every port and controller operation.
#[derive(Debug, thiserror::Error)]
pub enum ThemeSwitchError {
    /// Durable preference storage failed (unavailable, quota exceeded, …).
    #[error("preference storage error")]
    Storage(#[source] BoxError),

    /// Reading or mutating the document failed.
    #[error("document error")]
    Dom(#[source] BoxError),

    /// The color-scheme media query could not be evaluated.
    #[error("color-scheme query error")]
    MediaQuery(#[source] BoxError),
}

/// Text that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {value:?}")]
pub struct ParseThemeError {
    pub value: String,
}
