//! Primary location block renderer.

use pickup_data::StoreAvailability;

use crate::sections::escape_html;
use crate::state::StatusCategory;

/// Render the inline location block for the featured store.
///
/// Shows the pin icon tinted with the status colour, the store name and
/// hours, the stock label, and (when the store is out of stock but others
/// are not) a note pointing the shopper at other stores.
pub fn render_location(
    store: &StoreAvailability,
    category: StatusCategory,
    hours_text: &str,
    stock_label: &str,
    other_stores_note: Option<&str>,
) -> String {
    let note_html = match other_stores_note {
        Some(note) => format!(
            r#"<div class="pickup-availability-widget__other-stores text-size--small">{}</div>"#,
            escape_html(note)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="pickup-availability-widget__location">
    <div class="pickup-availability-widget__location-icon">
        {icon}
    </div>
    <div class="pickup-availability-widget__location-address">
        <span><strong>{name}</strong></span>
        <br><span class="pickup-availability-widget__location-hours">{hours}</span>
    </div>
    <div class="pickup-availability-widget__location-time">
        <span><strong>{stock}</strong></span>
    </div>
</div>
{note}"#,
        icon = render_pin_icon(category.icon_colour()),
        name = escape_html(&store.name),
        hours = escape_html(hours_text),
        stock = escape_html(stock_label),
        note = note_html
    )
}

/// Location pin SVG, tinted by availability status.
fn render_pin_icon(colour: &str) -> String {
    format!(
        r#"<svg height="256" viewBox="0 0 64 64" width="256" xmlns="http://www.w3.org/2000/svg"><g style="stroke-width:2;stroke-miterlimit:10;stroke:#202020;fill:none;stroke-linejoin:round;stroke-linecap:round"><path style="fill:#e3e3e3;" d="m38.1 46h13.9l8 16h-56l8-16h13.9"/><path style="fill:{colour}" d="m32 2a18.1 18.1 0 0 0 -18.1 18.1c0 16.3 18.1 32.3 18.1 32.3s18.1-16 18.1-32.3a18.1 18.1 0 0 0 -18.1-18.1z"/><ellipse style="fill:black;" cx="32" cy="20" rx="6" ry="6"/></g></svg>"#
    )
}
