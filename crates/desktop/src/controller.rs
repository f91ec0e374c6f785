//! Render/refresh cycle.
//!
//! [`InventoryController`] owns the widget state (product snapshot, search
//! text, fetch generation) and turns every user action into backend calls
//! followed by a full re-fetch and re-render. It runs on a single-threaded
//! event loop: state lives in `Cell`/`RefCell`, and no borrow is held across
//! an `.await`.

use std::cell::{Cell, RefCell};

use stockroom_client::ProductApi;
use stockroom_core::ProductId;
use stockroom_products::{Product, parse_quantity};

use crate::form::CreationForm;
use crate::notify::NoticeKind;
use crate::rows::build_rows;
use crate::view::InventoryView;

/// Shown when the adjust dialog gets something other than a whole number >= 0.
pub const INVALID_QUANTITY: &str = "Enter a valid quantity (0 or more).";

/// What the adjust dialog asks, pre-filled with the current stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustPrompt {
    pub product_id: ProductId,
    pub name: String,
    pub current_quantity: i64,
}

impl AdjustPrompt {
    pub fn message(&self) -> String {
        format!("New stock for {}:", self.name)
    }

    /// Initial text of the input.
    pub fn default_value(&self) -> String {
        self.current_quantity.to_string()
    }
}

#[derive(Debug, Default)]
struct InventoryState {
    products: Vec<Product>,
    search: String,
}

pub struct InventoryController<A, V> {
    api: A,
    view: V,
    state: RefCell<InventoryState>,
    // Last fetch issued; only its response may touch visible state.
    generation: Cell<u64>,
}

impl<A, V> InventoryController<A, V>
where
    A: ProductApi,
    V: InventoryView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: RefCell::new(InventoryState::default()),
            generation: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the last successfully fetched product list.
    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    pub fn search(&self) -> String {
        self.state.borrow().search.clone()
    }

    /// Fetch the product list for the current search text and redraw.
    ///
    /// A response that arrives after a newer fetch was issued is dropped, so
    /// out-of-order completions never overwrite fresher rows. On failure the
    /// table keeps its last rendered state and the user is notified.
    pub async fn refresh(&self) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let query = self.state.borrow().search.trim().to_string();

        let result = self.api.list(&query).await;

        let latest = self.generation.get();
        if generation != latest {
            tracing::debug!(
                "discarding product fetch #{} (latest is #{}, query: {:?})",
                generation,
                latest,
                query
            );
            return;
        }

        match result {
            Ok(products) => {
                self.state.borrow_mut().products = products;
                self.render();
            }
            Err(e) => self.view.notify(NoticeKind::Error, e.to_string()),
        }
    }

    /// Store the search text and refresh right away (no debounce).
    pub async fn set_search(&self, text: impl Into<String>) {
        self.state.borrow_mut().search = text.into();
        self.refresh().await;
    }

    /// Delete a product, then refresh. On failure the rows stay as they are.
    pub async fn delete(&self, id: &ProductId) {
        match self.api.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.view.notify(NoticeKind::Error, e.to_string()),
        }
    }

    /// Prompt for the adjust dialog, or `None` if `id` is not in the snapshot.
    pub fn adjust_prompt(&self, id: &ProductId) -> Option<AdjustPrompt> {
        let state = self.state.borrow();
        let product = state.products.iter().find(|p| &p.id == id)?;
        Some(AdjustPrompt {
            product_id: product.id.clone(),
            name: product.name.clone(),
            current_quantity: product.quantity,
        })
    }

    /// Apply the answer of the adjust dialog.
    ///
    /// `None` means the user dismissed the dialog: nothing happens. Input that
    /// is not a non-negative integer is reported without any network call.
    pub async fn adjust_quantity(&self, id: &ProductId, input: Option<&str>) {
        let Some(input) = input else {
            tracing::debug!("stock adjustment of {} cancelled", id);
            return;
        };

        let quantity = match parse_quantity(input) {
            Ok(quantity) => quantity,
            Err(e) => {
                tracing::debug!("rejected stock input for {}: {}", id, e);
                self.view
                    .notify(NoticeKind::Validation, INVALID_QUANTITY.to_string());
                return;
            }
        };

        match self.api.update_quantity(id, quantity).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.view.notify(NoticeKind::Error, e.to_string()),
        }
    }

    /// Submit the creation form under a fresh id.
    ///
    /// On success the form is cleared and the list refreshed; on failure the
    /// form keeps its contents so the user can retry. Returns whether the
    /// product was created.
    pub async fn submit(&self, form: &mut CreationForm) -> bool {
        let product = form.to_new_product(self.fresh_id());

        match self.api.create(&product).await {
            Ok(()) => {
                form.reset();
                self.refresh().await;
                true
            }
            Err(e) => {
                self.view.notify(NoticeKind::Error, e.to_string());
                false
            }
        }
    }

    fn render(&self) {
        let rows = build_rows(&self.state.borrow().products);
        self.view.render(&rows);
    }

    fn fresh_id(&self) -> ProductId {
        let state = self.state.borrow();
        loop {
            let id = ProductId::new();
            if state.products.iter().all(|p| p.id != id) {
                return id;
            }
        }
    }
}
