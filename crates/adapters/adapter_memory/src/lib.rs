//! # themeswitch-adapter-memory
//!
//! In-memory implementations of every application port.
//!
//! ## Provided adapters
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`MemoryPreferenceStore`] | `PreferenceStore` | Key-value map; can be made read-only to simulate a rejected write |
//! | [`ScriptedSystemPreference`] | `SystemPreference` | Boolean flipped by the caller |
//! | [`RecordingSurface`] | `ThemeSurface` | Keeps the marker and both icon displays for inspection |
//!
//! Share an adapter with the controller through `Rc` to keep a handle for
//! inspecting it afterwards.
//!
//! ## Dependency rule
//!
//! Depends on `themeswitch-app` (port traits) and `themeswitch-domain` only.

mod store;
mod surface;
mod system;

pub use store::{MemoryPreferenceStore, ReadOnlyStorage};
pub use surface::RecordingSurface;
pub use system::ScriptedSystemPreference;
