//! Display-state classification for the availability widget.
//!
//! Pure functions from availability data to the labels, alert classes, and
//! colours the sections render. Recomputed fully on every render; nothing
//! here is cached.

use pickup_data::StoreAvailability;
use pickup_core::{Sku, StoreHandle};

/// Stock counts above this display as `10+`.
const STOCK_DISPLAY_CAP: i64 = 10;

/// Status category for one store's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// No pickup stock at this store.
    OutOfStock,
    /// Product is a preorder; stock counts are not meaningful.
    Preorder,
    /// In stock for pickup.
    InStock,
}

impl StatusCategory {
    /// Classify a store's availability.
    pub fn classify(available: i64, is_preorder: bool) -> Self {
        if available <= 0 {
            Self::OutOfStock
        } else if is_preorder {
            Self::Preorder
        } else {
            Self::InStock
        }
    }

    /// Alert CSS modifier class.
    pub fn alert_class(&self) -> &'static str {
        match self {
            Self::OutOfStock => "alert--error",
            Self::Preorder => "alert--preorder",
            Self::InStock => "alert--success",
        }
    }

    /// Fill colour for the location pin icon.
    pub fn icon_colour(&self) -> &'static str {
        match self {
            Self::OutOfStock => "#e56d6d",
            Self::Preorder => "#00dbe8",
            Self::InStock => "#52c057",
        }
    }

    /// Status banner text for the store shown in the header.
    pub fn banner_text(&self, store_name: &str) -> String {
        match self {
            Self::OutOfStock => format!("Unavailable at {store_name}"),
            Self::Preorder => format!("Available for preorder at {store_name}"),
            Self::InStock => format!("Available for pickup at {store_name}"),
        }
    }
}

/// Stock label for a store: `"Out of stock"`, `"Available For Preorder"`,
/// or a count capped at `10+`.
pub fn stock_label(available: i64, is_preorder: bool) -> String {
    if available == 0 {
        "Out of stock".to_string()
    } else if is_preorder {
        "Available For Preorder".to_string()
    } else if available > STOCK_DISPLAY_CAP {
        format!("{STOCK_DISPLAY_CAP}+ in stock")
    } else {
        format!("{available} in stock")
    }
}

/// Product data read from the widget element's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    pub sku: Sku,
    pub title: String,
    pub is_preorder: bool,
}

impl ProductInfo {
    /// Parse the widget dataset. `tags` is comma-separated; the product is a
    /// preorder when any tag equals `PREORDER` case-insensitively.
    pub fn from_dataset(sku: &str, title: &str, tags: &str) -> Self {
        let is_preorder = tags
            .split(',')
            .any(|tag| tag.trim().eq_ignore_ascii_case("PREORDER"));
        Self {
            sku: Sku::new(sku),
            title: title.to_string(),
            is_preorder,
        }
    }
}

/// Pick the store to feature in the header: the entry for the persisted
/// selection, or the first directory entry when nothing matches.
pub fn store_to_show<'a>(
    all_stores: &'a [StoreAvailability],
    selected: Option<&StoreHandle>,
) -> Option<&'a StoreAvailability> {
    selected
        .and_then(|handle| all_stores.iter().find(|s| &s.handle == handle))
        .or_else(|| all_stores.first())
}

/// Whether any store other than `shown` has pickup stock.
pub fn other_stores_have_stock(all_stores: &[StoreAvailability], shown: &StoreAvailability) -> bool {
    all_stores
        .iter()
        .any(|s| s.handle != shown.handle && s.available > 0)
}
