//! Host-page ports.
//!
//! The widget never touches a real DOM directly; everything it reads from or
//! writes to the page goes through [`WidgetPage`], and everything it needs
//! from the store-selector component goes through [`StoreSelector`]. The
//! in-memory implementations here back the tests and the demo; a browser
//! build would implement the same traits over the real elements.

use std::collections::HashMap;

use pickup_core::{StoreDirectory, StoreHandle};

/// Product attributes read from the widget element.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDataset {
    pub sku: String,
    pub title: String,
    /// Comma-separated product tags.
    pub tags: String,
}

/// Rendering port over the host page.
pub trait WidgetPage {
    /// The widget element's data attributes, if the widget is present.
    fn dataset(&self) -> Option<WidgetDataset>;

    /// Name of the first missing required anchor, or `None` when the page is
    /// fully wired (header, locations, more button, sidebar list/title/container).
    fn missing_anchor(&self) -> Option<&'static str>;

    /// Replace the header banner content.
    fn set_header_html(&mut self, html: &str);

    /// Replace the inline locations block content.
    fn set_locations_html(&mut self, html: &str);

    /// Set the sidebar title to the product title.
    fn set_sidebar_title(&mut self, title: &str);

    /// Remove all sidebar rows.
    fn clear_sidebar(&mut self);

    /// Append one rendered sidebar row.
    fn append_sidebar_row(&mut self, html: &str);

    /// Reveal the "more" button and the sidebar container.
    fn reveal_pickup_controls(&mut self);

    /// Open the sidebar drawer. Returns `false` when the drawer element does
    /// not expose a show control.
    fn show_drawer(&mut self) -> bool;

    /// Reposition the sidebar drawer to immediately follow the page overlay.
    /// Layout side effect only; carries no state.
    fn move_sidebar_after_overlay(&mut self);

    /// The store selector's per-day closing-times lines for a store
    /// (0 = Sunday), or `None` when the selector has no entry for the handle.
    fn closing_times(&self, handle: &StoreHandle) -> Option<Vec<String>>;
}

/// Directory and selection port over the store-selector component.
pub trait StoreSelector {
    /// Snapshot of the handle → display-name directory.
    fn directory(&self) -> StoreDirectory;

    /// Update the selector's "currently displayed store" content.
    fn change_selected_store(&mut self, handle: &StoreHandle);

    /// Emit the selector's store-changed notification.
    fn notify_store_changed(&mut self);
}

/// In-memory [`WidgetPage`] for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryPage {
    dataset: Option<WidgetDataset>,
    missing_anchor: Option<&'static str>,
    closing_times: HashMap<StoreHandle, Vec<String>>,
    drawer_has_show: bool,

    pub header_html: String,
    pub locations_html: String,
    pub sidebar_title: String,
    pub sidebar_rows: Vec<String>,
    pub controls_revealed: bool,
    pub drawer_open_count: u32,
    pub sidebar_repositioned: bool,
}

impl MemoryPage {
    /// Create a fully wired page for a product.
    pub fn new(sku: &str, title: &str, tags: &str) -> Self {
        Self {
            dataset: Some(WidgetDataset {
                sku: sku.to_string(),
                title: title.to_string(),
                tags: tags.to_string(),
            }),
            drawer_has_show: true,
            ..Self::default()
        }
    }

    /// Create a page without the widget element.
    pub fn without_widget() -> Self {
        Self::default()
    }

    /// Mark one required anchor as absent.
    pub fn with_missing_anchor(mut self, anchor: &'static str) -> Self {
        self.missing_anchor = Some(anchor);
        self
    }

    /// Remove the drawer's show control.
    pub fn without_drawer_show(mut self) -> Self {
        self.drawer_has_show = false;
        self
    }

    /// Set a store's per-day closing-times lines.
    pub fn set_closing_times(&mut self, handle: StoreHandle, lines: Vec<String>) {
        self.closing_times.insert(handle, lines);
    }
}

impl WidgetPage for MemoryPage {
    fn dataset(&self) -> Option<WidgetDataset> {
        self.dataset.clone()
    }

    fn missing_anchor(&self) -> Option<&'static str> {
        self.missing_anchor
    }

    fn set_header_html(&mut self, html: &str) {
        self.header_html = html.to_string();
    }

    fn set_locations_html(&mut self, html: &str) {
        self.locations_html = html.to_string();
    }

    fn set_sidebar_title(&mut self, title: &str) {
        self.sidebar_title = title.to_string();
    }

    fn clear_sidebar(&mut self) {
        self.sidebar_rows.clear();
    }

    fn append_sidebar_row(&mut self, html: &str) {
        self.sidebar_rows.push(html.to_string());
    }

    fn reveal_pickup_controls(&mut self) {
        self.controls_revealed = true;
    }

    fn show_drawer(&mut self) -> bool {
        if self.drawer_has_show {
            self.drawer_open_count += 1;
            true
        } else {
            false
        }
    }

    fn move_sidebar_after_overlay(&mut self) {
        self.sidebar_repositioned = true;
    }

    fn closing_times(&self, handle: &StoreHandle) -> Option<Vec<String>> {
        self.closing_times.get(handle).cloned()
    }
}

/// In-memory [`StoreSelector`] over a fixed directory.
#[derive(Debug, Default)]
pub struct StaticSelector {
    directory: StoreDirectory,
    pub displayed_store: Option<StoreHandle>,
    pub change_notifications: u32,
}

impl StaticSelector {
    /// Create a selector for a directory.
    pub fn new(directory: StoreDirectory) -> Self {
        Self {
            directory,
            displayed_store: None,
            change_notifications: 0,
        }
    }
}

impl StoreSelector for StaticSelector {
    fn directory(&self) -> StoreDirectory {
        self.directory.clone()
    }

    fn change_selected_store(&mut self, handle: &StoreHandle) {
        self.displayed_store = Some(handle.clone());
    }

    fn notify_store_changed(&mut self) {
        self.change_notifications += 1;
    }
}
