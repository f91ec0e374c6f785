//! Plain-terminal rendering of the inventory (native builds).

use std::cell::RefCell;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};

use crate::notify::{NoticeKind, Notifications};
use crate::rows::ProductRow;
use crate::view::InventoryView;

const HEADER: [&str; 6] = ["Name", "SKU", "Price", "Quantity", "Min stock", "Status"];

/// Draws rows as a table on stdout and notices on stderr.
#[derive(Debug, Default)]
pub struct TerminalView {
    notices: RefCell<Notifications>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for `rows`; numeric columns right-aligned.
    pub fn table(rows: &[ProductRow]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(HEADER);

        for row in rows {
            table.add_row(vec![
                row.name.clone(),
                row.sku.clone(),
                row.price.clone(),
                row.quantity.to_string(),
                row.min_stock.to_string(),
                row.status_label().to_string(),
            ]);
        }

        for index in 2..=4 {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        table
    }

    pub fn has_errors(&self) -> bool {
        self.notices
            .borrow()
            .iter()
            .any(|n| n.kind == NoticeKind::Error)
    }
}

impl InventoryView for TerminalView {
    fn render(&self, rows: &[ProductRow]) {
        if rows.is_empty() {
            println!("No products found.");
        } else {
            println!("{}", Self::table(rows));
        }
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        eprintln!("{}", message);
        self.notices.borrow_mut().push(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use stockroom_products::Product;

    use super::*;

    fn row(name: &str, quantity: i64, min_stock: i64) -> ProductRow {
        ProductRow::from(&Product {
            id: name.parse().unwrap(),
            name: name.to_string(),
            sku: format!("{name}-SKU"),
            price: 1234.5,
            quantity,
            min_stock,
        })
    }

    #[test]
    fn table_lists_every_row_with_status() {
        let rendered = TerminalView::table(&[row("Tuerca", 40, 10), row("Tornillo", 2, 5)]).to_string();

        assert!(rendered.contains("Min stock"));
        assert!(rendered.contains("Tuerca-SKU"));
        assert!(rendered.contains("$1,234.50"));
        assert!(rendered.contains("OK"));
        assert!(rendered.contains("Low"));
    }

    #[test]
    fn notices_are_kept_and_classified() {
        let view = TerminalView::new();
        view.notify(NoticeKind::Validation, "bad input".to_string());
        assert!(!view.has_errors());

        view.notify(NoticeKind::Error, "Could not load the inventory.".to_string());
        assert!(view.has_errors());
        assert_eq!(view.notices.borrow().len(), 2);
    }
}
