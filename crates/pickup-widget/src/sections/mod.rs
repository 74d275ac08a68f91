//! Section renderers for the availability widget.

mod header;
mod location;
mod sidebar;

pub use header::*;
pub use location::*;
pub use sidebar::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
