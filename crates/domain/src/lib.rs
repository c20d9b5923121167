//! # themeswitch-domain
//!
//! Pure domain model for the themeswitch light/dark toggle.
//!
//! ## Responsibilities
//! - Define the **Theme** value (`light` / `dark`) and its textual form
//! - Define how a theme maps onto the **icon** pair (sun / moon)
//! - Define **resolution** results (which source produced the effective theme)
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod icon;
pub mod resolution;
pub mod theme;
