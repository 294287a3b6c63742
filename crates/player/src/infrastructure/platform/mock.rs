//! In-memory platform implementations for tests and read-only sessions

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDateTime;

use crate::ports::outbound::{StorageError, StorageProvider, TimeProvider};

/// Key-value store held in memory, with an optional size quota
///
/// When a quota is set, a save whose total stored bytes would exceed it
/// fails the way a browser does, with a `QuotaExceededError` description.
#[derive(Default)]
pub struct MemoryStorageProvider {
    values: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
    saves: AtomicUsize,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Pre-populate a key.
    pub fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        storage
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Other(e.to_string()))?;
        if let Some(quota) = self.quota_bytes {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::from_failure_message(format!(
                    "QuotaExceededError: Setting the value of '{}' exceeded the quota.",
                    key
                )));
            }
        }
        values.insert(key.to_string(), value.to_string());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .map_err(|e| StorageError::Other(e.to_string()))?
            .remove(key);
        Ok(())
    }
}

/// Clock frozen at a fixed instant
#[derive(Clone)]
pub struct FixedTimeProvider(pub NaiveDateTime);

impl TimeProvider for FixedTimeProvider {
    fn now_local(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorageProvider::new();
        storage.save("a", "1").unwrap();
        assert_eq!(storage.load("a"), Some("1".to_string()));
        assert_eq!(storage.save_count(), 1);
        storage.remove("a").unwrap();
        assert_eq!(storage.load("a"), None);
    }

    #[test]
    fn test_quota_exceeded() {
        let storage = MemoryStorageProvider::with_quota(10);
        storage.save("k", "12345").unwrap();
        let err = storage.save("k", "0123456789").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(storage.load("k"), Some("12345".to_string()));
    }
}
