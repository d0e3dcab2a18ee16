//! Key-value storage backends
//!
//! The journal persists everything as string values under a handful of string
//! keys, the way a browser's local storage works. `FileSystemStorage` keeps one
//! file per key; `MemoryStorage` keeps them in a map.

use crate::error::{MoodjourError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Flat string-to-string store
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Directory-backed store: the value of `key` is the content of `<dir>/<key>`.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    dir: PathBuf,
}

impl FileSystemStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileSystemStorage { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MoodjourError::Persistence(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileSystemStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key, bytes = value.len(), "read storage key");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MoodjourError::Persistence(format!(
                "Failed to read '{}': {}",
                key, e
            ))),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let fail = |e: std::io::Error| {
            MoodjourError::Persistence(format!("Failed to write '{}': {}", key, e))
        };

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(fail)?;
        }

        let tmp_path = self
            .dir
            .join(format!(".{}.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value).map_err(fail)?;

        let replaced = if cfg!(windows) && path.exists() {
            fs::remove_file(&path).and_then(|_| fs::rename(&tmp_path, &path))
        } else {
            fs::rename(&tmp_path, &path)
        };
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(fail(e));
        }

        debug!(key, bytes = value.len(), "wrote storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MoodjourError::Persistence(format!(
                "Failed to remove '{}': {}",
                key, e
            ))),
        }
    }
}

/// In-memory store.
///
/// `set_unavailable(true)` makes every call fail with a persistence error,
/// the way disabled or full browser storage does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.get() {
            Err(MoodjourError::Persistence(
                "Storage is unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_available()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
