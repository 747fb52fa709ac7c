//! # Theme Preference
//!
//! Colour theme persisted under [`THEME_KEY`] as `"dark"` or `"light"`.
//! The store is injected, so the same logic works over a file, a browser
//! storage adapter, or memory.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::preferences::{MemoryStore, Theme, ThemePreference};
//!
//! let mut prefs = ThemePreference::init(MemoryStore::new())?;
//! assert_eq!(prefs.current(), Theme::Light);
//!
//! assert_eq!(prefs.toggle()?, Theme::Dark);
//! # Ok::<(), fit_core::FitError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FitError, FitResult};

use super::store::PreferenceStore;

/// Storage key for the theme entry
pub const THEME_KEY: &str = "fitstance-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FitError;

    /// Exact, case-sensitive match on the stored strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(FitError::invalid_input("theme", s, "Expected 'dark' or 'light'")),
        }
    }
}

/// Current theme plus the store it is persisted in.
#[derive(Debug)]
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Read the saved theme.
    ///
    /// Nothing saved, or an unrecognized value, yields [`Theme::Light`]; the
    /// store is not written.
    pub fn init(store: S) -> FitResult<Self> {
        let current = match store.get(THEME_KEY)? {
            Some(saved) => saved.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %saved, "ignoring unrecognized saved theme");
                Theme::default()
            }),
            None => Theme::default(),
        };
        tracing::debug!(theme = %current, "theme initialized");
        Ok(ThemePreference { store, current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Persist `theme` and make it current.
    ///
    /// The in-memory value is unchanged if the write fails.
    pub fn set(&mut self, theme: Theme) -> FitResult<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        Ok(())
    }

    /// Flip between dark and light, persisting the result.
    pub fn toggle(&mut self) -> FitResult<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::store::MemoryStore;

    #[test]
    fn test_default_is_light() {
        let prefs = ThemePreference::init(MemoryStore::new()).unwrap();
        assert_eq!(prefs.current(), Theme::Light);
        assert_eq!(prefs.into_store().get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_saved_dark_applied() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let prefs = ThemePreference::init(store).unwrap();
        assert!(prefs.current().is_dark());
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "Dark").unwrap();
        let prefs = ThemePreference::init(store).unwrap();
        assert_eq!(prefs.current(), Theme::Light);
        // saved value is left alone
        assert_eq!(prefs.into_store().get(THEME_KEY).unwrap().as_deref(), Some("Dark"));
    }

    #[test]
    fn test_toggle_writes_through() {
        let mut store = MemoryStore::new();
        {
            let mut prefs = ThemePreference::init(&mut store).unwrap();
            assert_eq!(prefs.toggle().unwrap(), Theme::Dark);
            assert_eq!(prefs.toggle().unwrap(), Theme::Light);
            assert_eq!(prefs.toggle().unwrap(), Theme::Dark);
        }
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_backed_roundtrip() {
        use crate::preferences::store::FileStore;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = ThemePreference::init(FileStore::new(&path)).unwrap();
        prefs.set(Theme::Dark).unwrap();

        let reloaded = ThemePreference::init(FileStore::new(&path)).unwrap();
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_theme_strings() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
