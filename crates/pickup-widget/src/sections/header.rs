//! Header status banner renderers.

use crate::sections::escape_html;
use crate::state::StatusCategory;

/// Render the header status banner for the featured store.
pub fn render_status_banner(category: StatusCategory, text: &str) -> String {
    format!(
        r#"<span class="alert {alert_class} alert--circle alert--unstyled">{text}</span>"#,
        alert_class = category.alert_class(),
        text = escape_html(text)
    )
}

/// Render the banner shown when the inventory fetch fails.
pub fn render_error_banner() -> String {
    r#"<span class="alert alert--error alert--circle alert--unstyled">Error checking availability</span>"#
        .to_string()
}

/// Render the banner shown when no stores are resolvable.
///
/// This is a terminal display state, not an error.
pub fn render_unavailable_banner() -> String {
    r#"<span class="alert alert--error alert--circle alert--unstyled">Not currently available for pickup</span>"#
        .to_string()
}
