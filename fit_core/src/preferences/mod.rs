//! # Preferences
//!
//! The only state the site keeps between visits is the colour theme. It is
//! modelled as an injected [`PreferenceStore`] plus a [`ThemePreference`]
//! that reads it once on init and writes through on every change.

pub mod store;
pub mod theme;

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
pub use store::{MemoryStore, PreferenceStore, PreferencesDocument};
pub use theme::{Theme, ThemePreference, THEME_KEY};
