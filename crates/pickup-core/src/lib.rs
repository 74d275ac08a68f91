//! Core domain types for the store pickup availability widget.
//!
//! This crate provides:
//! - `StoreHandle` / `Sku` - typed identifiers
//! - `StoreDirectory` - the authoritative list of stores with normalized name matching
//! - `hours` - store-hours parsing and 12-hour time formatting
//! - `WidgetError` - error taxonomy
//! - `StructuredLogger` - structured logging

pub mod directory;
pub mod error;
pub mod hours;
pub mod ids;
pub mod logging;

pub use directory::{normalize_name, StoreDirectory};
pub use error::WidgetError;
pub use ids::{Sku, StoreHandle};
pub use logging::{LogEntry, LogFormat, LogLevel, StructuredLogger};
