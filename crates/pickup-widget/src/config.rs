//! Widget configuration.

use serde::{Deserialize, Serialize};

use pickup_data::SELECTED_STORE_KEY;

/// Default inventory endpoint.
const DEFAULT_ENDPOINT: &str = "https://rex-api.jayden-e91.workers.dev/inventory";

/// Default brand label used in the "available at other stores" note.
const DEFAULT_BRAND: &str = "TTW";

/// Configuration for one widget instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Inventory API endpoint; the SKU is appended as a query parameter.
    pub endpoint: String,
    /// Storage key holding the selected store handle.
    pub storage_key: String,
    /// Brand label shown in the "available at other … stores" note.
    pub brand: String,
}

impl WidgetConfig {
    /// Create a configuration for an endpoint, with default key and brand.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            storage_key: SELECTED_STORE_KEY.to_string(),
            brand: DEFAULT_BRAND.to_string(),
        }
    }

    /// Override the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Override the brand label.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
