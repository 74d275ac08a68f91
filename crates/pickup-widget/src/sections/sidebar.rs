//! Sidebar store-list row renderer.

use pickup_data::StoreAvailability;

use crate::sections::escape_html;
use crate::state::StatusCategory;

/// Render one sidebar row for a store.
///
/// Each row shows the store's own hours and stock status, plus a
/// "Set as my store" action carrying the handle in `data-set-store`; the
/// currently selected store's button is disabled and relabelled.
pub fn render_sidebar_row(
    store: &StoreAvailability,
    category: StatusCategory,
    hours_text: &str,
    stock_label: &str,
    is_current: bool,
) -> String {
    let button = render_set_store_button(store, is_current);

    format!(
        r#"<li class="store-availability-list__item">
    <div class="store-availability-list-header">
        <div class="store-availability-list-header__info">
            <span class="store-availability-list-header__location text-size--large text-weight--bold">{name}</span>
            <span class="store-availability-list__hours">{hours}</span>
        </div>
        <span class="store-availability-list__stock alert {alert_class} alert--circle alert--unstyled">{stock}</span>
    </div>
    <div class="store-availability-list__actions desktop-only">
        {button}
    </div>
    <div class="store-availability-list__actions mobile-only">
        {button}
    </div>
</li>"#,
        name = escape_html(&store.name),
        hours = escape_html(hours_text),
        alert_class = category.alert_class(),
        stock = escape_html(stock_label),
        button = button
    )
}

fn render_set_store_button(store: &StoreAvailability, is_current: bool) -> String {
    let disabled = if is_current { " disabled" } else { "" };
    let label = if is_current {
        "Current Store"
    } else {
        "Set as my store"
    };
    format!(
        r#"<button class="button button--small" data-set-store="{handle}"{disabled}>{label}</button>"#,
        handle = escape_html(store.handle.as_str()),
        disabled = disabled,
        label = label
    )
}
