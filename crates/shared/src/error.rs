//! Errors raised at the import boundary
//!
//! Reading from storage never errors (see [`crate::documents::from_storage_json`]);
//! only explicit user imports report failures.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The text is not JSON at all
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Valid JSON, but not shaped like a strategy memo
    #[error("Invalid strategy memo format")]
    InvalidFormat,
}

impl ImportError {
    /// Message suitable for an error dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "The file could not be read. Please choose a JSON file.",
            Self::InvalidFormat => "The data format is invalid.",
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_error() {
        let err: ImportError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ImportError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_user_messages_differ() {
        assert_ne!(
            ImportError::InvalidFormat.user_message(),
            ImportError::InvalidJson(String::new()).user_message()
        );
    }
}
