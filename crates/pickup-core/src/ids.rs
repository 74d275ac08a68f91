//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a raw outlet name where a store handle is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(StoreHandle);
define_id!(Sku);

impl StoreHandle {
    /// Derive a URL-safe handle from a store's display name.
    ///
    /// Lowercases the name and collapses whitespace runs into single hyphens,
    /// so `"Queen Street"` becomes `queen-street`.
    pub fn from_display_name(name: &str) -> Self {
        let handle = name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let handle = StoreHandle::new("queen-street");
        assert_eq!(handle.as_str(), "queen-street");
    }

    #[test]
    fn test_id_from_string() {
        let sku: Sku = "SKU-123".into();
        assert_eq!(sku.as_str(), "SKU-123");
    }

    #[test]
    fn test_id_display() {
        let handle = StoreHandle::new("newmarket");
        assert_eq!(format!("{}", handle), "newmarket");
    }

    #[test]
    fn test_handle_from_display_name() {
        assert_eq!(
            StoreHandle::from_display_name("Queen Street"),
            StoreHandle::new("queen-street")
        );
        assert_eq!(
            StoreHandle::from_display_name("  Mount   Eden  "),
            StoreHandle::new("mount-eden")
        );
    }
}
