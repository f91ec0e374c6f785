//! Contract between the widget and the product backend.

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::ProductId;
use stockroom_products::{NewProduct, Product};

pub const LOAD_FAILED: &str = "Could not load the inventory.";
pub const SAVE_FAILED: &str = "Could not save the product.";
pub const DELETE_FAILED: &str = "Could not delete the product.";
pub const UPDATE_FAILED: &str = "Could not update the stock.";

/// Failure of a backend call.
///
/// `Display` is the message shown to the user. Transport details (status
/// codes, connection errors) are logged where they happen and never leak
/// into the notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Listing products failed (non-2xx, transport, or body parse).
    #[error("{}", LOAD_FAILED)]
    Load,

    /// Creating a product failed; carries the backend's `message` when it
    /// sent one, the generic save message otherwise.
    #[error("{0}")]
    Save(String),

    #[error("{}", DELETE_FAILED)]
    Delete,

    #[error("{}", UPDATE_FAILED)]
    Update,
}

impl ApiError {
    /// Save failure without a usable backend message.
    pub fn save_failed() -> Self {
        Self::Save(SAVE_FAILED.to_string())
    }
}

/// CRUD operations the widget needs from the backend.
///
/// `?Send`: the widget runs on a single-threaded event loop and the wasm32
/// `reqwest` futures are not `Send`.
#[async_trait(?Send)]
pub trait ProductApi {
    /// `GET /api/products[?q=query]`; `q` is only sent for a non-empty query.
    async fn list(&self, query: &str) -> Result<Vec<Product>, ApiError>;

    /// `POST /api/products`.
    async fn create(&self, product: &NewProduct) -> Result<(), ApiError>;

    /// `DELETE /api/products/{id}`.
    async fn delete(&self, id: &ProductId) -> Result<(), ApiError>;

    /// `PATCH /api/products/{id}/quantity` with `{"quantity": n}`.
    async fn update_quantity(&self, id: &ProductId, quantity: i64) -> Result<(), ApiError>;
}
