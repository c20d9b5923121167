//! # themeswitch-app
//!
//! Application layer — the theme controller use-case and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — durable storage of the explicit user choice
//!   - `SystemPreference` — the OS "prefers light" color-scheme signal
//!   - `ThemeSurface` — the document theme marker and the two icons
//! - Define the **driving/inbound** use-case: `ThemePreferenceController`
//!   (initialize, resolve, apply, toggle, react to OS changes)
//! - Define the shared configuration (`ThemeConfig`) every adapter reads
//!
//! ## Dependency rule
//! Depends on `themeswitch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
