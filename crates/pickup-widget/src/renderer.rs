//! The availability renderer.
//!
//! One render cycle runs Idle → Fetching → {Rendered | Error} and is fully
//! re-entrant: every invocation clears and rebuilds both output regions, with
//! no diffing against prior output. A monotonically increasing render
//! generation is taken before the fetch; a fetch that resolves after a newer
//! render has started is discarded, so only the most recently initiated
//! render's data ever reaches the page.

use std::sync::atomic::{AtomicU64, Ordering};

use pickup_core::{hours, LogFormat, LogLevel, StoreHandle, StructuredLogger, WidgetError};
use pickup_data::{resolve_availability, InventoryApi, KeyValueStore};

use crate::config::WidgetConfig;
use crate::page::{StoreSelector, WidgetPage};
use crate::sections::{
    render_error_banner, render_location, render_sidebar_row, render_status_banner,
    render_unavailable_banner,
};
use crate::state::{other_stores_have_stock, stock_label, store_to_show, ProductInfo, StatusCategory};

/// Terminal state of one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Both output regions were rebuilt.
    Rendered,
    /// The directory had no stores; only the header was written.
    EmptyDirectory,
    /// The fetch or decode failed; only the error banner was written.
    Error,
    /// The widget is not wired into the page (or the click targeted the
    /// current store); nothing was written.
    Skipped,
    /// A newer render started while this one was fetching; the result was
    /// discarded.
    Stale,
}

/// The store pickup availability widget.
///
/// Generic over its four ports: the host page, the store selector, the
/// selected-store storage, and the inventory API.
pub struct AvailabilityWidget<P, S, K, A> {
    page: P,
    selector: S,
    storage: K,
    api: A,
    config: WidgetConfig,
    logger: StructuredLogger,
    generation: AtomicU64,
}

impl<P, S, K, A> AvailabilityWidget<P, S, K, A>
where
    P: WidgetPage,
    S: StoreSelector,
    K: KeyValueStore,
    A: InventoryApi,
{
    /// Create a widget over its ports.
    pub fn new(page: P, selector: S, storage: K, api: A, config: WidgetConfig) -> Self {
        Self {
            page,
            selector,
            storage,
            api,
            config,
            logger: StructuredLogger::new("pickup-availability").with_format(LogFormat::Human),
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the default logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Page-ready entry point: reposition the sidebar drawer after the page
    /// overlay, then perform the initial render. The host re-invokes
    /// [`render`](Self::render) on the selector's store-changed notification.
    pub async fn mount(&mut self) -> RenderOutcome {
        self.page.move_sidebar_after_overlay();
        self.render().await
    }

    /// Run one full render cycle using today's store hours.
    pub async fn render(&mut self) -> RenderOutcome {
        self.render_for_day(hours::today_index()).await
    }

    /// Run one full render cycle with an explicit day-of-week (0 = Sunday).
    pub async fn render_for_day(&mut self, today: usize) -> RenderOutcome {
        let generation = self.begin_generation();

        if let Some(anchor) = self.page.missing_anchor() {
            self.logger
                .warn(WidgetError::MissingAnchor(anchor).to_string());
            return RenderOutcome::Skipped;
        }
        let Some(dataset) = self.page.dataset() else {
            self.logger
                .warn(WidgetError::MissingAnchor("widget").to_string());
            return RenderOutcome::Skipped;
        };
        if dataset.sku.is_empty() {
            self.logger
                .warn(WidgetError::MissingDataset("sku").to_string());
            return RenderOutcome::Skipped;
        }
        let product = ProductInfo::from_dataset(&dataset.sku, &dataset.title, &dataset.tags);

        let result = self.api.fetch_availability(&product.sku).await;

        if !self.generation_is_current(generation) {
            self.logger
                .builder(LogLevel::Debug, "Discarding stale render")
                .field("generation", generation)
                .emit();
            return RenderOutcome::Stale;
        }

        let records = match result {
            Ok(records) => records,
            Err(e) => {
                self.logger
                    .builder(
                        LogLevel::Error,
                        WidgetError::Inventory(e.to_string()).to_string(),
                    )
                    .field("sku", product.sku.as_str())
                    .emit();
                self.page.set_header_html(&render_error_banner());
                return RenderOutcome::Error;
            }
        };

        let directory = self.selector.directory();
        let selected = self
            .storage
            .get(&self.config.storage_key)
            .map(StoreHandle::new);
        let all_stores = resolve_availability(&directory, &records);

        self.page.set_locations_html("");
        self.page.clear_sidebar();

        let Some(shown) = store_to_show(&all_stores, selected.as_ref()).cloned() else {
            self.page.set_header_html(&render_unavailable_banner());
            return RenderOutcome::EmptyDirectory;
        };

        let category = StatusCategory::classify(shown.available, product.is_preorder);
        let note = (shown.is_out_of_stock() && other_stores_have_stock(&all_stores, &shown))
            .then(|| format!("Available at other {} stores", self.config.brand));

        self.page
            .set_header_html(&render_status_banner(category, &category.banner_text(&shown.name)));
        self.page.set_locations_html(&render_location(
            &shown,
            category,
            &self.hours_for(&shown.handle, today),
            &stock_label(shown.available, product.is_preorder),
            note.as_deref(),
        ));

        self.page.set_sidebar_title(&product.title);
        for store in &all_stores {
            let row_category = StatusCategory::classify(store.available, product.is_preorder);
            let is_current = selected.as_ref() == Some(&store.handle);
            self.page.append_sidebar_row(&render_sidebar_row(
                store,
                row_category,
                &self.hours_for(&store.handle, today),
                &stock_label(store.available, product.is_preorder),
                is_current,
            ));
        }
        self.page.reveal_pickup_controls();

        self.logger
            .builder(LogLevel::Info, "Availability rendered")
            .field("sku", product.sku.as_str())
            .field("stores", all_stores.len())
            .field("shown", shown.name.as_str())
            .emit();

        RenderOutcome::Rendered
    }

    /// Handle a click on a sidebar "set as my store" control.
    ///
    /// Clicks on the current store's (disabled) button are ignored. Otherwise
    /// the handle is persisted, the store selector is updated and notified,
    /// and the widget fully re-renders.
    pub async fn select_store(&mut self, handle: &StoreHandle) -> RenderOutcome {
        let current = self.storage.get(&self.config.storage_key);
        if current.as_deref() == Some(handle.as_str()) {
            return RenderOutcome::Skipped;
        }

        self.storage.set(&self.config.storage_key, handle.as_str());
        self.selector.change_selected_store(handle);
        self.selector.notify_store_changed();
        self.logger
            .builder(LogLevel::Info, "Selected store changed")
            .field("handle", handle.as_str())
            .emit();

        self.render().await
    }

    /// Handle a click on the "more" button: open the sidebar drawer when the
    /// page exposes a show control.
    pub fn open_more(&mut self) -> bool {
        self.page.show_drawer()
    }

    /// The page port (primarily for tests and demos).
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The storage port.
    pub fn storage(&self) -> &K {
        &self.storage
    }

    /// The selector port.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    fn hours_for(&self, handle: &StoreHandle, today: usize) -> String {
        self.page
            .closing_times(handle)
            .map(|lines| hours::store_hours_text(&lines, today))
            .unwrap_or_default()
    }

    fn begin_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn generation_is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pickup_core::{Sku, StoreDirectory};
    use pickup_data::{FetchError, InventoryRecord, MemoryStore};

    use crate::page::{MemoryPage, StaticSelector};

    struct NullApi;

    #[async_trait]
    impl InventoryApi for NullApi {
        async fn fetch_availability(&self, _sku: &Sku) -> Result<Vec<InventoryRecord>, FetchError> {
            Ok(Vec::new())
        }
    }

    fn widget(page: MemoryPage) -> AvailabilityWidget<MemoryPage, StaticSelector, MemoryStore, NullApi>
    {
        AvailabilityWidget::new(
            page,
            StaticSelector::new(StoreDirectory::new()),
            MemoryStore::new(),
            NullApi,
            WidgetConfig::default(),
        )
    }

    #[test]
    fn test_generation_staleness() {
        let w = widget(MemoryPage::new("SKU-1", "Product", ""));
        let first = w.begin_generation();
        assert!(w.generation_is_current(first));

        let second = w.begin_generation();
        assert!(!w.generation_is_current(first));
        assert!(w.generation_is_current(second));
    }

    #[test]
    fn test_open_more_requires_show_control() {
        let mut with_show = widget(MemoryPage::new("SKU-1", "Product", ""));
        assert!(with_show.open_more());
        assert_eq!(with_show.page().drawer_open_count, 1);

        let mut without = widget(MemoryPage::new("SKU-1", "Product", "").without_drawer_show());
        assert!(!without.open_more());
        assert_eq!(without.page().drawer_open_count, 0);
    }

    #[tokio::test]
    async fn test_missing_anchor_skips_silently() {
        let page = MemoryPage::new("SKU-1", "Product", "").with_missing_anchor("rex-sidebar-list");
        let mut w = widget(page);
        assert_eq!(w.render_for_day(0).await, RenderOutcome::Skipped);
        assert!(w.page().header_html.is_empty());
    }

    #[tokio::test]
    async fn test_missing_widget_skips_silently() {
        let mut w = widget(MemoryPage::without_widget());
        assert_eq!(w.render_for_day(0).await, RenderOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_empty_directory_renders_terminal_banner() {
        let mut w = widget(MemoryPage::new("SKU-1", "Product", ""));
        assert_eq!(w.render_for_day(0).await, RenderOutcome::EmptyDirectory);
        assert!(w
            .page()
            .header_html
            .contains("Not currently available for pickup"));
        assert!(w.page().sidebar_rows.is_empty());
        assert!(!w.page().controls_revealed);
    }
}
