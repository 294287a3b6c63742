//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::{StorageError, StorageProvider, TimeProvider};
use chrono::{Local, NaiveDateTime};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Desktop time provider using the local clock
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/stratmemo/storage.json
/// - macOS: ~/Library/Application Support/io.stratmemo.stratmemo/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\stratmemo\stratmemo\config\storage.json
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: RwLock<HashMap<String, String>>,
}

impl DesktopStorageProvider {
    /// Storage file in the platform config directory.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("io", "stratmemo", "stratmemo") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("stratmemo_storage.json")
        }
    }

    /// Open the storage file at `storage_path`, loading existing data.
    ///
    /// A missing or unreadable file starts an empty store.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = Self::read_file(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: RwLock::new(cache),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    fn read_file(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Failed to parse storage file: {}", e);
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read storage file: {}", e);
                HashMap::new()
            }
        }
    }

    /// Persist the cache to disk
    fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(cache)?;
        fs::write(&self.storage_path, data)?;
        Ok(())
    }

    fn update(
        &self,
        change: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|e| {
            StorageError::Other(format!("Failed to acquire write lock for storage: {}", e))
        })?;
        let mut next = guard.clone();
        change(&mut next);
        // Only commit to the cache once the file write succeeded.
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|cache| {
            cache.insert(key.to_string(), value.to_string());
        })
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|cache| {
            cache.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::open(&path);
        assert_eq!(storage.load("k"), None);
        storage.save("k", "v").unwrap();
        assert_eq!(storage.load("k"), Some("v".to_string()));

        let reopened = DesktopStorageProvider::open(&path);
        assert_eq!(reopened.load("k"), Some("v".to_string()));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DesktopStorageProvider::open(dir.path().join("storage.json"));
        storage.save("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.load("k"), None);
        assert_eq!(
            DesktopStorageProvider::open(storage.storage_path()).load("k"),
            None
        );
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{broken").unwrap();
        assert_eq!(DesktopStorageProvider::open(&path).load("k"), None);
    }

    #[test]
    fn test_failed_write_leaves_cache_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("storage.json");
        fs::create_dir_all(&path).unwrap();
        let storage = DesktopStorageProvider::open(&path);
        assert!(storage.save("k", "v").is_err());
        assert_eq!(storage.load("k"), None);
    }
}
