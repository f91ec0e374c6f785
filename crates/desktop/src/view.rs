//! Seam between the refresh cycle and whatever draws it.

use crate::notify::NoticeKind;
use crate::rows::ProductRow;

/// Sink for the controller's output.
///
/// Implemented by the Leptos frontend (signals), the terminal renderer, and
/// recording fakes in tests.
pub trait InventoryView {
    /// Replace every visible row with `rows`, in order.
    fn render(&self, rows: &[ProductRow]);

    /// Show a message to the user until they dismiss it.
    fn notify(&self, kind: NoticeKind, message: String);
}
