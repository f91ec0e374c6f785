use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// Stock status derived from `quantity` vs `min_stock`.
///
/// Recomputed on every render; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Low,
}

impl StockStatus {
    /// Label shown in the status column.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "Low",
        }
    }

    /// Style class attached to the status cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::Ok => "status-ok",
            StockStatus::Low => "status-low",
        }
    }
}

/// A product record as returned by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub quantity: i64,
    pub min_stock: i64,
}

impl Product {
    /// `Low` once stock has reached the threshold, `Ok` above it.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity <= self.min_stock {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }
}

/// Creation payload for `POST /api/products`.
///
/// Numeric fields are optional: whatever the user typed is sent without client
/// validation, and input that does not parse goes out as `null` for the
/// backend to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub min_stock: Option<i64>,
}
