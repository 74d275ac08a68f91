//! Data access for the pickup availability widget.
//!
//! This crate provides:
//! - `InventoryApi` / `HttpInventoryClient` - the per-SKU inventory fetch
//! - `InventoryRecord` / `resolve_availability` - directory-authoritative
//!   availability resolution
//! - `KeyValueStore` / `MemoryStore` - the persisted store-selection port

mod client;
mod records;
mod storage;

pub use client::*;
pub use records::*;
pub use storage::*;
