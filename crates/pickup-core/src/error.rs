//! Widget error types.

use thiserror::Error;

/// Errors that can occur while rendering the availability widget.
///
/// Configuration errors (`MissingAnchor`, `MissingDataset`) mean the widget is
/// not wired into the page; they are logged and never shown to the shopper.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A required page anchor is absent.
    #[error("Missing widget anchor: {0}")]
    MissingAnchor(&'static str),

    /// A required data attribute is absent from the widget element.
    #[error("Missing widget data attribute: {0}")]
    MissingDataset(&'static str),

    /// The inventory fetch or decode failed.
    #[error("Inventory lookup failed: {0}")]
    Inventory(String),
}
