//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! All ports are synchronous and take `&self`: the host runs every handler to
//! completion on a single thread, so adapters use interior mutability where
//! they need it.

pub mod preference_store;
pub mod system_preference;
pub mod theme_surface;

pub use preference_store::PreferenceStore;
pub use system_preference::SystemPreference;
pub use theme_surface::ThemeSurface;
