//! Store pickup availability widget.
//!
//! Renders per-store pickup availability for one SKU into a product page:
//! an inline header/location block for the shopper's selected store, and a
//! sidebar listing every store in the directory with a "set as my store"
//! action. Browser coupling (DOM, local storage, the store-selector
//! component) sits behind small ports so the fetch/compute/render cycle is
//! testable without a browser.

pub mod config;
pub mod page;
pub mod renderer;
pub mod sections;
pub mod state;

pub use config::WidgetConfig;
pub use page::{MemoryPage, StaticSelector, StoreSelector, WidgetDataset, WidgetPage};
pub use renderer::{AvailabilityWidget, RenderOutcome};
pub use state::{ProductInfo, StatusCategory};
