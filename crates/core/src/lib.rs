//! `stockroom-core` — building blocks shared by every stockroom crate.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
