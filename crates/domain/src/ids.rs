use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an identifier read back from storage.
            pub fn from_string(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Map IDs
define_id!(GameMapId);
define_id!(GameMapDetailId);
define_id!(GameMapShapeId);

// Crafting and notes
define_id!(PreparationId);
define_id!(MemoId);

// Root aggregate
define_id!(StrategyMemoId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(MemoId::new(), MemoId::new());
    }

    #[test]
    fn test_ids_compare_by_value() {
        let a = GameMapId::from_string("map-1");
        let b = GameMapId::from_string("map-1");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "map-1");
    }

    #[test]
    fn test_empty_id() {
        assert!(GameMapId::from_string("").is_empty());
        assert!(!GameMapId::new().is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = PreparationId::from_string("prep-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prep-7\"");
        let back: PreparationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
