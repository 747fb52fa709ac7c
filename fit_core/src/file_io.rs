//! # File I/O Module
//!
//! Handles preferences file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent two processes writing the file at once
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Preferences are saved as pretty-printed JSON (see
//! [`PreferencesDocument`]). Lock files add a `.lock` suffix to the extension
//! and record who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fit_core::file_io::{load_preferences, save_preferences, FileLock};
//! use std::path::Path;
//!
//! let path = Path::new("preferences.json");
//! let lock = FileLock::acquire(path, "fitstance")?;
//!
//! let mut doc = load_preferences(path)?;
//! doc.set("fitstance-theme", "dark");
//! save_preferences(&doc, path)?;
//!
//! drop(lock);
//! # Ok::<(), fit_core::errors::FitError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{FitError, FitResult};
use crate::preferences::store::{PreferencesDocument, SCHEMA_VERSION};

/// Holder metadata written into the `.lock` file.
///
/// Only used to describe the holder in a `FileLocked` error; the OS lock on
/// the file decides who actually holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// Who took the lock (application or user name)
    pub owner: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    pub fn new(owner: impl Into<String>) -> Self {
        LockInfo {
            owner: owner.into(),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

/// Exclusive write lock on a preferences file, released on drop.
///
/// The lock is an fs2 (flock / LockFileEx) lock on a sidecar `.lock` file.
/// The OS drops it when the holding process exits, so a lock file left
/// behind by a crashed process never blocks the next writer.
pub struct FileLock {
    target_path: PathBuf,
    file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire the lock without blocking.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired
    /// * `Err(FitError::FileLocked)` - Another handle holds the OS lock
    pub fn acquire(path: &Path, owner: impl Into<String>) -> FitResult<Self> {
        let lock_path = lock_path_for(path);
        let lock_err = |op: &str, e: std::io::Error| {
            FitError::file_error(op, lock_path.display().to_string(), e.to_string())
        };

        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| lock_err("create directory", e))?;
        }

        // Not truncated: a live holder's metadata must survive until we own the lock
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| lock_err("open lock", e))?;

        if let Err(e) = file.try_lock_exclusive() {
            if e.raw_os_error() != fs2::lock_contended_error().raw_os_error() {
                return Err(lock_err("lock", e));
            }
            let (locked_by, locked_at) = match read_holder(&mut file) {
                Some(holder) => (
                    format!("{} (pid {})", holder.owner, holder.pid),
                    holder.locked_at.to_rfc3339(),
                ),
                None => ("another process".to_string(), "unknown".to_string()),
            };
            return Err(FitError::file_locked(path.display().to_string(), locked_by, locked_at));
        }

        let info = LockInfo::new(owner);
        let json =
            serde_json::to_string_pretty(&info).map_err(|e| FitError::serialization(e.to_string()))?;

        file.set_len(0).map_err(|e| lock_err("write lock", e))?;
        file.seek(SeekFrom::Start(0)).map_err(|e| lock_err("write lock", e))?;
        file.write_all(json.as_bytes()).map_err(|e| lock_err("write lock", e))?;
        file.sync_all().map_err(|e| lock_err("sync lock", e))?;

        tracing::debug!(path = %lock_path.display(), owner = %info.owner, "acquired preferences lock");

        Ok(FileLock {
            target_path: path.to_path_buf(),
            file,
            info,
        })
    }

    /// Path of the file this lock guards
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // The sidecar file stays; deleting it would let a racing writer lock
        // an unlinked inode while a third creates a fresh one.
        let _ = self.file.set_len(0);
        let _ = self.file.unlock();
    }
}

/// Best-effort read of the current holder's metadata.
fn read_holder(file: &mut File) -> Option<LockInfo> {
    let mut contents = String::new();
    file.seek(SeekFrom::Start(0)).ok()?;
    file.read_to_string(&mut contents).ok()?;
    serde_json::from_str(&contents).ok()
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut lock_path = path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = tmp_path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

/// Save preferences with atomic write semantics.
///
/// 1. Serialize to JSON
/// 2. Write to a sibling `.tmp` file and fsync
/// 3. Rename over the target (atomic on most filesystems)
///
/// Creates the parent directory if needed.
pub fn save_preferences(doc: &PreferencesDocument, path: &Path) -> FitResult<()> {
    let json =
        serde_json::to_string_pretty(doc).map_err(|e| FitError::serialization(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FitError::file_error("create directory", parent.display().to_string(), e.to_string())
        })?;
    }

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FitError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        FitError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        FitError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FitError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), entries = doc.entries.len(), "saved preferences");
    Ok(())
}

/// Load preferences from a file.
///
/// A missing file yields an empty document.
///
/// # Returns
///
/// * `Err(FitError::VersionMismatch)` - File version is incompatible
/// * `Err(FitError::SerializationError)` - Invalid JSON
/// * `Err(FitError::FileError)` - I/O error
pub fn load_preferences(path: &Path) -> FitResult<PreferencesDocument> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PreferencesDocument::new()),
        Err(e) => {
            return Err(FitError::file_error("open", path.display().to_string(), e.to_string()))
        }
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        FitError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let doc: PreferencesDocument = serde_json::from_str(&contents).map_err(|e| {
        FitError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&doc.version)?;

    Ok(doc)
}

/// Major version must match; in 0.x a newer minor is also rejected.
fn validate_version(file_version: &str) -> FitResult<()> {
    let mismatch = || FitError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}
