//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are opaque to the engine: the storage service may hand out
//! numeric keys or strings, and both are kept as text. Using newtype wrappers
//! prevents accidentally mixing up IDs from different entity types at compile
//! time.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire form of an identifier: the service may send either a string or a number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID for a locally created record
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ExpenseId);
define_id!(BudgetId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::from("food");
        assert_eq!(id.to_string(), "food");
    }

    #[test]
    fn test_deserialize_from_string_or_number() {
        let from_text: CategoryId = serde_json::from_str("\"7\"").unwrap();
        let from_number: CategoryId = serde_json::from_str("7").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(from_number.as_str(), "7");
    }

    #[test]
    fn test_serializes_as_string() {
        let id = BudgetId::from("12");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // ExpenseId and CategoryId are distinct types even with the same text;
        // comparing them directly would fail to compile.
        let expense_id = ExpenseId::from("1");
        let category_id = CategoryId::from("1");
        assert_eq!(expense_id.as_str(), category_id.as_str());
    }
}
