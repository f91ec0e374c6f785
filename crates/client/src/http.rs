//! `reqwest` implementation of [`ProductApi`].

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Deserialize;

use stockroom_core::ProductId;
use stockroom_products::{NewProduct, Product};

use crate::api::{ApiError, ProductApi};
use crate::config::ClientConfig;

/// Error body sent by the backend on a rejected create (`{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for `/api/products`.
///
/// No retries and no timeouts: each call maps to exactly one request.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpProductApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn products_url(&self) -> Url {
        self.config.endpoint(&["api", "products"])
    }

    fn product_url(&self, id: &ProductId) -> Url {
        self.config.endpoint(&["api", "products", id.as_str()])
    }

    fn quantity_url(&self, id: &ProductId) -> Url {
        self.config.endpoint(&["api", "products", id.as_str(), "quantity"])
    }
}

/// Read the backend's `message` from a failed response, if it sent a usable one.
async fn error_message(resp: Response) -> Option<String> {
    let body: ErrorBody = resp.json().await.ok()?;
    body.message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let query = query.trim();
        let mut req = self.client.get(self.products_url());
        if !query.is_empty() {
            req = req.query(&[("q", query)]);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::warn!("listing products failed: {}", e);
            ApiError::Load
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("listing products returned {}", status);
            return Err(ApiError::Load);
        }

        let products: Vec<Product> = resp.json().await.map_err(|e| {
            tracing::warn!("product list body could not be parsed: {}", e);
            ApiError::Load
        })?;

        tracing::debug!("fetched {} products (query: {:?})", products.len(), query);
        Ok(products)
    }

    async fn create(&self, product: &NewProduct) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.products_url())
            .json(product)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("creating product {} failed: {}", product.id, e);
                ApiError::save_failed()
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("creating product {} returned {}", product.id, status);
            return Err(match error_message(resp).await {
                Some(message) => ApiError::Save(message),
                None => ApiError::save_failed(),
            });
        }

        tracing::info!("created product {} ({})", product.id, product.sku);
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.product_url(id))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("deleting product {} failed: {}", id, e);
                ApiError::Delete
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("deleting product {} returned {}", id, status);
            return Err(ApiError::Delete);
        }

        tracing::info!("deleted product {}", id);
        Ok(())
    }

    async fn update_quantity(&self, id: &ProductId, quantity: i64) -> Result<(), ApiError> {
        let resp = self
            .client
            .patch(self.quantity_url(id))
            .json(&QuantityBody { quantity })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("updating stock of {} failed: {}", id, e);
                ApiError::Update
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("updating stock of {} returned {}", id, status);
            return Err(ApiError::Update);
        }

        tracing::info!("set stock of {} to {}", id, quantity);
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct QuantityBody {
    quantity: i64,
}
