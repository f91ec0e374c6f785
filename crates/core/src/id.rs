//! Strongly-typed identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product record.
///
/// The backend treats ids as opaque strings. Products created from the widget
/// get a random UUIDv4 assigned on the client; anything the server hands back
/// is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new random identifier (UUIDv4, hyphenated).
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        if s.contains('/') {
            return Err(DomainError::invalid_id(format!("ProductId: '{}' contains '/'", s)));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct_uuids() {
        let a = ProductId::new();
        let b = ProductId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn parses_and_displays_verbatim() {
        let raw = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let id: ProductId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);

        let legacy: ProductId = "sku-legacy-7".parse().unwrap();
        assert_eq!(legacy.as_str(), "sku-legacy-7");
    }

    #[test]
    fn rejects_empty_or_path_like_ids() {
        for raw in ["", "   ", "a/b"] {
            match raw.parse::<ProductId>().unwrap_err() {
                DomainError::InvalidId(msg) => assert!(msg.starts_with("ProductId")),
                _ => panic!("Expected InvalidId error"),
            }
        }
    }

    #[test]
    fn serializes_as_bare_string() {
        let id: ProductId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");
    }
}
