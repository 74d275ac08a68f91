//! Key-value storage port for the shopper's selected store.

use std::collections::HashMap;

/// Storage key holding the selected store handle.
pub const SELECTED_STORE_KEY: &str = "selected-store";

/// Minimal key-value storage port.
///
/// In the browser this is backed by local storage; tests use [`MemoryStore`].
/// Single key, last write wins, no transactions.
pub trait KeyValueStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
