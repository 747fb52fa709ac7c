//! # Preference Storage
//!
//! A small string key/value contract. The site keeps exactly one entry, the
//! theme, but stores are keyed so a renderer can share one file.
//!
//! - [`MemoryStore`] - in-process map, for tests and embedding
//! - [`FileStore`] - JSON document on disk with atomic, locked writes

use std::collections::{BTreeMap, HashMap};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::FitResult;
#[cfg(not(target_arch = "wasm32"))]
use crate::file_io::{load_preferences, save_preferences, FileLock};

/// Current schema version for preference files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Read/write access to persisted preference strings.
pub trait PreferenceStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> FitResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> FitResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> FitResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> FitResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> FitResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FitResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk preference document.
///
/// ```json
/// {
///   "version": "0.1.0",
///   "modified": "2026-10-18T12:00:00Z",
///   "entries": { "fitstance-theme": "dark" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Last modification timestamp
    pub modified: DateTime<Utc>,

    pub entries: BTreeMap<String, String>,
}

impl PreferencesDocument {
    pub fn new() -> Self {
        PreferencesDocument {
            version: SCHEMA_VERSION.to_string(),
            modified: Utc::now(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set an entry and update the modification timestamp
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
        self.modified = Utc::now();
    }
}

impl Default for PreferencesDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Store backed by a JSON file.
///
/// Every write takes the file lock, re-reads the document, applies the change
/// and saves atomically, so concurrent processes never lose each other's keys.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    owner: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into(),
            owner: "fitstance".to_string(),
        }
    }

    /// Name recorded in the lock file while writing
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> FitResult<Option<String>> {
        let doc = load_preferences(&self.path)?;
        Ok(doc.get(key).map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> FitResult<()> {
        let _lock = FileLock::acquire(&self.path, self.owner.as_str())?;
        let mut doc = load_preferences(&self.path)?;
        doc.set(key, value);
        save_preferences(&doc, &self.path)
    }
}
