//! `stockroom-client` — HTTP access to the inventory backend.
//!
//! The widget never talks to the network directly: it goes through the
//! [`ProductApi`] trait, and [`HttpProductApi`] is the `reqwest`-backed
//! implementation used in production (native and wasm32 alike).

pub mod api;
pub mod config;
pub mod http;

pub use api::{ApiError, ProductApi};
pub use config::{ClientConfig, ConfigError};
pub use http::HttpProductApi;
