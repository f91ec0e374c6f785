//! `stockroom-desktop`
//!
//! **Responsibility:** the inventory widget itself.
//!
//! This crate provides:
//! - The render/refresh cycle ([`InventoryController`])
//! - Table rows, the creation form, and non-blocking notifications
//! - A Leptos frontend (wasm32) and a terminal renderer (native)
//!
//! The widget is a **thin shell** around the product API: a full re-fetch is
//! the only consistency mechanism.

pub mod controller;
pub mod form;
pub mod notify;
pub mod rows;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use controller::{AdjustPrompt, InventoryController};
pub use form::CreationForm;
pub use notify::{Notice, NoticeId, NoticeKind, Notifications};
pub use rows::ProductRow;
pub use view::InventoryView;
