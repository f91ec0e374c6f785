//! Products module.
//!
//! This crate contains the product record as the backend serves it, plus the
//! presentation rules derived from it (stock status, MXN prices, quantity
//! input). Deterministic logic only: no IO, no HTTP.

pub mod money;
pub mod product;
pub mod quantity;

pub use money::format_mxn;
pub use product::{NewProduct, Product, StockStatus};
pub use quantity::parse_quantity;
