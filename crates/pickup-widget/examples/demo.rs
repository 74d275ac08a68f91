//! Renders the availability widget against in-memory ports and prints the
//! produced regions.
//!
//! Run with: `cargo run --example demo`

use async_trait::async_trait;

use pickup_core::{LogFormat, LogLevel, Sku, StoreDirectory, StoreHandle, StructuredLogger};
use pickup_data::{FetchError, InventoryApi, InventoryRecord, MemoryStore};
use pickup_widget::{AvailabilityWidget, MemoryPage, StaticSelector, WidgetConfig};

/// Inventory API returning a fixed snapshot.
struct FixedApi(Vec<InventoryRecord>);

#[async_trait]
impl InventoryApi for FixedApi {
    async fn fetch_availability(&self, _sku: &Sku) -> Result<Vec<InventoryRecord>, FetchError> {
        Ok(self.0.clone())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let directory =
        StoreDirectory::from_names(["Queen Street", "Newmarket", "Sylvia Park"]);

    let mut page = MemoryPage::new("SKU-100", "Trail Shoe", "NEW");
    for (handle, _) in directory.iter() {
        page.set_closing_times(handle.clone(), vec!["Closing at 5:30pm".to_string(); 7]);
    }

    let api = FixedApi(vec![
        InventoryRecord {
            outlet_name: "Queen Street".to_string(),
            available: 4,
        },
        InventoryRecord {
            outlet_name: "Newmarket".to_string(),
            available: 14,
        },
    ]);

    let mut widget = AvailabilityWidget::new(
        page,
        StaticSelector::new(directory),
        MemoryStore::new(),
        api,
        WidgetConfig::default(),
    )
    .with_logger(
        StructuredLogger::new("pickup-availability")
            .with_min_level(LogLevel::Debug)
            .with_format(LogFormat::Human),
    );

    let outcome = widget.mount().await;
    println!("mount outcome: {outcome:?}\n");
    println!("header:\n{}\n", widget.page().header_html);
    println!("locations:\n{}\n", widget.page().locations_html);

    widget.select_store(&StoreHandle::new("newmarket")).await;
    println!("after selecting Newmarket:\n{}\n", widget.page().header_html);
    for row in &widget.page().sidebar_rows {
        println!("{row}\n");
    }

    Ok(())
}
