//! Configuration — JSON document with per-element overrides.
//!
//! Every field has a sensible default so an empty document (or none at all)
//! is valid. Overrides are applied after parsing and take precedence over the
//! document's values.

use serde::Deserialize;

/// Names recognised by [`ThemeConfig::apply_overrides`].
pub const OVERRIDE_KEYS: [&str; 5] = [
    "storage-key",
    "attribute",
    "sun-selector",
    "moon-selector",
    "query",
];

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Durable storage key holding the explicit choice.
    pub storage_key: String,
    /// Attribute on the document root holding the current theme.
    pub marker_attribute: String,
    /// CSS selector of the toggle control.
    pub toggle_selector: String,
    /// CSS selector of the sun icon, relative to the toggle.
    pub sun_selector: String,
    /// CSS selector of the moon icon, relative to the toggle.
    pub moon_selector: String,
    /// Media query whose `matches` means "light preferred".
    pub light_query: String,
    /// Maximum log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            marker_attribute: "data-theme".to_string(),
            toggle_selector: ".theme-toggle".to_string(),
            sun_selector: ".sun-icon".to_string(),
            moon_selector: ".moon-icon".to_string(),
            light_query: "(prefers-color-scheme: light)".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::Validation`] when a field is unusable.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config = if input.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(input)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace fields with values found by `lookup`, keyed by
    /// [`OVERRIDE_KEYS`]. Blank values are ignored.
    ///
    /// The toggle selector is not overridable: it is needed to find the
    /// element the overrides are read from.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for key in OVERRIDE_KEYS {
            let Some(val) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            tracing::debug!(key, value = %val, "config override");
            match key {
                "storage-key" => self.storage_key = val,
                "attribute" => self.marker_attribute = val,
                "sun-selector" => self.sun_selector = val,
                "moon-selector" => self.moon_selector = val,
                "query" => self.light_query = val,
                _ => {}
            }
        }
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("marker_attribute", &self.marker_attribute),
            ("toggle_selector", &self.toggle_selector),
            ("sun_selector", &self.sun_selector),
            ("moon_selector", &self.moon_selector),
            ("light_query", &self.light_query),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if self.marker_attribute.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "marker_attribute must not contain whitespace".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log_level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse theme config")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid theme config: {0}")]
    Validation(String),
}
