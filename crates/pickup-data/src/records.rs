//! Inventory records and directory-authoritative availability resolution.

use serde::{Deserialize, Serialize};

use pickup_core::{normalize_name, StoreDirectory, StoreHandle};

/// One per-outlet availability record, as returned by the inventory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Display name of the physical store.
    pub outlet_name: String,
    /// Units available for pickup. The API may report negatives for
    /// oversold stock.
    pub available: i64,
}

/// Availability for one directory store, after matching.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreAvailability {
    /// The directory handle for the store.
    pub handle: StoreHandle,
    /// Display name from the directory.
    pub name: String,
    /// Units available, never negative.
    pub available: i64,
}

impl StoreAvailability {
    /// Whether this store has no pickup stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.available <= 0
    }
}

/// Match fetched records against the directory.
///
/// The directory is authoritative: the result has exactly one entry per
/// directory store, in directory order. A record matches a store when its
/// outlet name equals the directory name under [`normalize_name`]; unmatched
/// stores get a synthetic zero record, and fetched records for stores absent
/// from the directory are ignored. Negative counts are clamped to zero.
pub fn resolve_availability(
    directory: &StoreDirectory,
    records: &[InventoryRecord],
) -> Vec<StoreAvailability> {
    directory
        .iter()
        .map(|(handle, name)| {
            let normalized = normalize_name(name);
            let available = records
                .iter()
                .find(|r| normalize_name(&r.outlet_name) == normalized)
                .map(|r| r.available.max(0))
                .unwrap_or(0);
            StoreAvailability {
                handle: handle.clone(),
                name: name.to_string(),
                available,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, available: i64) -> InventoryRecord {
        InventoryRecord {
            outlet_name: name.to_string(),
            available,
        }
    }

    #[test]
    fn test_one_entry_per_directory_store() {
        let dir = StoreDirectory::from_names(["Queen Street", "Newmarket", "Sylvia Park"]);
        let records = vec![record("Queen Street", 3)];

        let all = resolve_availability(&dir, &records);
        assert_eq!(all.len(), dir.len());
        assert_eq!(all[0].available, 3);
        assert_eq!(all[1].available, 0);
        assert_eq!(all[2].available, 0);
    }

    #[test]
    fn test_match_is_case_and_whitespace_insensitive() {
        let dir = StoreDirectory::from_names(["Queen Street"]);
        let records = vec![record("  QUEEN street ", 7)];

        let all = resolve_availability(&dir, &records);
        assert_eq!(all[0].available, 7);
    }

    #[test]
    fn test_extra_records_are_ignored() {
        let dir = StoreDirectory::from_names(["Newmarket"]);
        let records = vec![record("Warehouse Outlet", 50), record("Newmarket", 2)];

        let all = resolve_availability(&dir, &records);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Newmarket");
        assert_eq!(all[0].available, 2);
    }

    #[test]
    fn test_negative_counts_are_clamped() {
        let dir = StoreDirectory::from_names(["Queen Street"]);
        let records = vec![record("Queen Street", -3)];

        let all = resolve_availability(&dir, &records);
        assert_eq!(all[0].available, 0);
        assert!(all[0].is_out_of_stock());
    }

    #[test]
    fn test_empty_directory_yields_no_entries() {
        let dir = StoreDirectory::new();
        let all = resolve_availability(&dir, &[record("Queen Street", 5)]);
        assert!(all.is_empty());
    }
}
