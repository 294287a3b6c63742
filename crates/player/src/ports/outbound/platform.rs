//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations

use chrono::NaiveDateTime;
use thiserror::Error;

/// Why a storage write failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The store refused the write because it is full
    #[error("Storage quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Storage serialization failed: {0}")]
    Serialization(String),

    #[error("Storage failed: {0}")]
    Other(String),
}

/// Markers that identify a full store in a failure description.
const QUOTA_MARKERS: [&str; 2] = ["quota", "no space left"];

impl StorageError {
    /// Classify a failure by its description.
    ///
    /// Browsers report a full `localStorage` as `QuotaExceededError`; disks
    /// report `EDQUOT`/`ENOSPC`. All of them map to [`StorageError::QuotaExceeded`].
    pub fn from_failure_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if QUOTA_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            Self::QuotaExceeded(message)
        } else {
            Self::Other(message)
        }
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match Self::from_failure_message(err.to_string()) {
            Self::QuotaExceeded(message) => Self::QuotaExceeded(message),
            _ => Self::Io(err.to_string()),
        }
    }
}

/// Durable string key-value store (localStorage/file-based)
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Local wall-clock time, used for export file names
pub trait TimeProvider: Send + Sync {
    fn now_local(&self) -> NaiveDateTime;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_quota_message() {
        let err = StorageError::from_failure_message(
            "QuotaExceededError: The quota has been exceeded.",
        );
        assert!(err.is_quota_exceeded());
    }

    #[test]
    fn test_disk_full_message() {
        let err = StorageError::from_failure_message("No space left on device (os error 28)");
        assert!(err.is_quota_exceeded());
    }

    #[test]
    fn test_other_message() {
        let err = StorageError::from_failure_message("SecurityError: access denied");
        assert_eq!(
            err,
            StorageError::Other("SecurityError: access denied".to_string())
        );
    }

    #[test]
    fn test_io_error_classification() {
        let err: StorageError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, StorageError::Io(_)));

        let err: StorageError =
            std::io::Error::new(std::io::ErrorKind::Other, "Disk quota exceeded").into();
        assert!(err.is_quota_exceeded());
    }
}
