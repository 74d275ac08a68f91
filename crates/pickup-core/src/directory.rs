//! The store directory: the authoritative list of pickup locations.

use serde::{Deserialize, Serialize};

use crate::ids::StoreHandle;

/// Normalize a store name for comparison.
///
/// Every name comparison in the widget goes through this function, so
/// inconsistent casing or padding in API data cannot cause silent mismatches.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// An ordered mapping from store handle to display name.
///
/// The directory is owned by the host page's store-selector component and is
/// read-only to the widget; iteration order is the order stores appear in the
/// selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDirectory {
    entries: Vec<(StoreHandle, String)>,
}

impl StoreDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from explicit handle/name pairs.
    pub fn from_entries<H, N>(entries: impl IntoIterator<Item = (H, N)>) -> Self
    where
        H: Into<StoreHandle>,
        N: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(h, n)| (h.into(), n.into()))
                .collect(),
        }
    }

    /// Build a directory from display names, deriving each handle.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: names
                .into_iter()
                .map(|n| (StoreHandle::from_display_name(n), n.to_string()))
                .collect(),
        }
    }

    /// Display name for a handle, if present.
    pub fn name_for(&self, handle: &StoreHandle) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, n)| n.as_str())
    }

    /// Iterate handle/name pairs in directory order.
    pub fn iter(&self) -> impl Iterator<Item = (&StoreHandle, &str)> {
        self.entries.iter().map(|(h, n)| (h, n.as_str()))
    }

    /// Number of stores in the directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no stores.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Queen Street "), "queen street");
        assert_eq!(normalize_name("NEWMARKET"), "newmarket");
    }

    #[test]
    fn test_from_names_derives_handles() {
        let dir = StoreDirectory::from_names(["Queen Street", "Newmarket"]);
        assert_eq!(dir.len(), 2);
        assert_eq!(
            dir.name_for(&StoreHandle::new("queen-street")),
            Some("Queen Street")
        );
        assert_eq!(dir.name_for(&StoreHandle::new("sylvia-park")), None);
    }

    #[test]
    fn test_iteration_preserves_order() {
        let dir = StoreDirectory::from_names(["B Store", "A Store"]);
        let names: Vec<_> = dir.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["B Store", "A Store"]);
    }
}
