//! Preference storage backends.
//!
//! The theme store persists one key through a [`PreferenceStorage`]. The desktop
//! site uses [`FileStorage`] (a flat JSON object in the user's config dir);
//! tests and headless runs use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StorageError;

/// File name used inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Key/value string storage scoped to the current user.
pub trait PreferenceStorage {
    /// Read a value. A missing key is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same map, so a clone handed to a second
/// store sees what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Current value for `key`, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by `<dir>/preferences.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(PREFERENCES_FILE),
        }
    }

    /// Storage backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage in the default location (`<config_dir>/folio`).
    pub fn default_location() -> Result<Self, StorageError> {
        let dir = default_data_dir()
            .ok_or_else(|| StorageError::unavailable("no user config directory"))?;
        Ok(Self::in_dir(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

impl PreferenceStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Deserialization(e)) => {
                tracing::warn!(path = %self.path.display(), "Discarding unreadable preferences: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| StorageError::serialization(e.to_string()))?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), key, "Saved preference");
        Ok(())
    }
}

/// Default data directory: `<config_dir>/folio`.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("theme").unwrap(), None);
    }

    #[test]
    fn test_memory_clones_share_values() {
        let mut a = MemoryStorage::new();
        let b = a.clone();
        a.save("theme", "olive").unwrap();
        assert_eq!(b.load("theme").unwrap().as_deref(), Some("olive"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::in_dir(dir.path());
        assert_eq!(storage.load("theme").unwrap(), None);

        storage.save("theme", "velvet").unwrap();
        let reopened = FileStorage::in_dir(dir.path());
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("velvet"));
    }

    #[test]
    fn test_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::in_dir(dir.path().join("nested").join("folio"));
        storage.save("theme", "light").unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_file_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::in_dir(dir.path());
        storage.save("other", "1").unwrap();
        storage.save("theme", "olive").unwrap();
        assert_eq!(storage.load("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_file_corrupt_read_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "{theme: olive").unwrap();
        let storage = FileStorage::in_dir(dir.path());
        assert!(matches!(
            storage.load("theme"),
            Err(StorageError::Deserialization(_))
        ));
    }

    #[test]
    fn test_file_corrupt_is_replaced_on_save() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "][").unwrap();
        let mut storage = FileStorage::in_dir(dir.path());
        storage.save("theme", "olive").unwrap();
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("olive"));
    }

    #[test]
    fn test_file_empty_is_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "").unwrap();
        let storage = FileStorage::in_dir(dir.path());
        assert_eq!(storage.load("theme").unwrap(), None);
    }
}
