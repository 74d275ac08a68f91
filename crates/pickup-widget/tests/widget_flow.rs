//! End-to-end widget flow against in-memory ports.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use pickup_core::{Sku, StoreDirectory, StoreHandle};
use pickup_data::{FetchError, InventoryApi, InventoryRecord, MemoryStore};
use pickup_widget::{
    AvailabilityWidget, MemoryPage, RenderOutcome, StaticSelector, WidgetConfig,
};

/// Inventory API that replays a scripted sequence of responses.
struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Vec<InventoryRecord>, FetchError>>>,
}

impl ScriptedApi {
    fn new(responses: Vec<Result<Vec<InventoryRecord>, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl InventoryApi for ScriptedApi {
    async fn fetch_availability(&self, _sku: &Sku) -> Result<Vec<InventoryRecord>, FetchError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted API exhausted")
    }
}

fn record(name: &str, available: i64) -> InventoryRecord {
    InventoryRecord {
        outlet_name: name.to_string(),
        available,
    }
}

fn directory() -> StoreDirectory {
    StoreDirectory::from_names(["Queen Street", "Newmarket", "Sylvia Park"])
}

fn page_for(tags: &str) -> MemoryPage {
    let mut page = MemoryPage::new("SKU-100", "Trail Shoe", tags);
    page.set_closing_times(
        StoreHandle::new("queen-street"),
        vec!["Closing at 5pm".to_string(); 7],
    );
    page.set_closing_times(
        StoreHandle::new("newmarket"),
        vec!["Closing at 6:30pm".to_string(); 7],
    );
    page.set_closing_times(
        StoreHandle::new("sylvia-park"),
        vec!["Opening at 9am".to_string(); 7],
    );
    page
}

fn widget(
    page: MemoryPage,
    api: ScriptedApi,
) -> AvailabilityWidget<MemoryPage, StaticSelector, MemoryStore, ScriptedApi> {
    AvailabilityWidget::new(
        page,
        StaticSelector::new(directory()),
        MemoryStore::new(),
        api,
        WidgetConfig::default(),
    )
}

#[tokio::test]
async fn initial_render_builds_header_and_full_sidebar() {
    let api = ScriptedApi::new(vec![Ok(vec![
        record("Queen Street", 4),
        record("Newmarket", 12),
    ])]);
    let mut w = widget(page_for(""), api);

    assert_eq!(w.mount().await, RenderOutcome::Rendered);

    let page = w.page();
    assert!(page.sidebar_repositioned);
    assert!(page.controls_revealed);
    // No store selected yet: the first directory store is featured.
    assert!(page.header_html.contains("Available for pickup at Queen Street"));
    assert!(page.header_html.contains("alert--success"));
    assert!(page.locations_html.contains("4 in stock"));
    assert_eq!(page.sidebar_title, "Trail Shoe");

    // One row per directory store, not per fetched record.
    assert_eq!(page.sidebar_rows.len(), 3);
    assert!(page.sidebar_rows[1].contains("10+ in stock"));
    assert!(page.sidebar_rows[2].contains("Out of stock"));

    // Each row shows its own store's hours.
    assert!(page.sidebar_rows[0].contains("Closes at 5pm"));
    assert!(page.sidebar_rows[1].contains("Closes at 6:30pm"));
    assert!(page.sidebar_rows[2].contains("Opens at 9am"));
}

#[tokio::test]
async fn out_of_stock_store_points_at_other_stores() {
    let api = ScriptedApi::new(vec![Ok(vec![record("Newmarket", 2)])]);
    let mut w = widget(page_for(""), api);

    // Queen Street (first, featured) has no stock but Newmarket does.
    assert_eq!(w.render_for_day(0).await, RenderOutcome::Rendered);
    assert!(w.page().header_html.contains("Unavailable at Queen Street"));
    assert!(w.page().header_html.contains("alert--error"));
    assert!(w
        .page()
        .locations_html
        .contains("Available at other TTW stores"));
}

#[tokio::test]
async fn no_note_when_no_store_has_stock() {
    let api = ScriptedApi::new(vec![Ok(vec![])]);
    let mut w = widget(page_for(""), api);

    assert_eq!(w.render_for_day(0).await, RenderOutcome::Rendered);
    assert!(!w.page().locations_html.contains("Available at other"));
}

#[tokio::test]
async fn preorder_tag_overrides_stock_count() {
    let api = ScriptedApi::new(vec![Ok(vec![record("Queen Street", 5)])]);
    let mut w = widget(page_for("NEW,PREORDER"), api);

    assert_eq!(w.render_for_day(0).await, RenderOutcome::Rendered);
    assert!(w
        .page()
        .header_html
        .contains("Available for preorder at Queen Street"));
    assert!(w.page().header_html.contains("alert--preorder"));
    assert!(w.page().locations_html.contains("Available For Preorder"));
    assert!(!w.page().locations_html.contains("in stock"));
}

#[tokio::test]
async fn selecting_a_store_persists_notifies_and_rerenders() {
    let stock = vec![record("Queen Street", 4), record("Newmarket", 2)];
    let api = ScriptedApi::new(vec![Ok(stock.clone()), Ok(stock)]);
    let mut w = widget(page_for(""), api);

    assert_eq!(w.render_for_day(0).await, RenderOutcome::Rendered);

    let newmarket = StoreHandle::new("newmarket");
    assert_eq!(w.select_store(&newmarket).await, RenderOutcome::Rendered);

    use pickup_data::KeyValueStore;
    assert_eq!(
        w.storage().get("selected-store").as_deref(),
        Some("newmarket")
    );
    assert_eq!(w.selector().displayed_store.as_ref(), Some(&newmarket));
    assert_eq!(w.selector().change_notifications, 1);

    // The re-render features the new store and disables its button.
    assert!(w.page().header_html.contains("Available for pickup at Newmarket"));
    assert!(w.page().sidebar_rows[1].contains("Current Store"));
    assert!(w.page().sidebar_rows[1].contains("disabled"));
    assert!(w.page().sidebar_rows[0].contains("Set as my store"));

    // Clicking the now-disabled current store does nothing.
    assert_eq!(w.select_store(&newmarket).await, RenderOutcome::Skipped);
    assert_eq!(w.selector().change_notifications, 1);
}

#[tokio::test]
async fn fetch_failure_shows_banner_and_leaves_sidebar_alone() {
    let api = ScriptedApi::new(vec![
        Ok(vec![record("Queen Street", 4)]),
        Err(FetchError::Http {
            status: 502,
            url: "https://inventory.example/inventory?sku=SKU-100".to_string(),
        }),
    ]);
    let mut w = widget(page_for(""), api);

    assert_eq!(w.render_for_day(0).await, RenderOutcome::Rendered);
    let rows_before = w.page().sidebar_rows.clone();
    assert_eq!(rows_before.len(), 3);

    assert_eq!(w.render_for_day(0).await, RenderOutcome::Error);
    assert!(w.page().header_html.contains("Error checking availability"));
    assert_eq!(w.page().sidebar_rows, rows_before);
}
