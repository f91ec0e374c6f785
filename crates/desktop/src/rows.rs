//! Table rows as the view draws them.

use stockroom_core::ProductId;
use stockroom_products::{Product, StockStatus, format_mxn};

/// One rendered table row; everything already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: String,
    pub quantity: i64,
    pub min_stock: i64,
    pub status: StockStatus,
}

impl ProductRow {
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    pub fn status_class(&self) -> &'static str {
        self.status.css_class()
    }
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: format_mxn(product.price),
            quantity: product.quantity,
            min_stock: product.min_stock,
            status: product.stock_status(),
        }
    }
}

/// Rows for `products`, in the same order.
pub fn build_rows(products: &[Product]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, quantity: i64, min_stock: i64, price: f64) -> Product {
        Product {
            id: id.parse().unwrap(),
            name: format!("Item {id}"),
            sku: format!("SKU-{id}"),
            price,
            quantity,
            min_stock,
        }
    }

    #[test]
    fn row_formats_price_and_status() {
        let row = ProductRow::from(&product("a", 2, 5, 1234.5));
        assert_eq!(row.price, "$1,234.50");
        assert_eq!(row.status_label(), "Low");
        assert_eq!(row.status_class(), "status-low");
        assert_eq!(row.quantity, 2);
        assert_eq!(row.min_stock, 5);
    }

    #[test]
    fn build_rows_preserves_order() {
        let products = vec![
            product("c", 9, 1, 1.0),
            product("a", 1, 9, 2.0),
            product("b", 5, 5, 3.0),
        ];
        let rows = build_rows(&products);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(rows[0].status_label(), "OK");
    }
}
