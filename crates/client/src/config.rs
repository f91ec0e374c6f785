//! Client configuration.

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "STOCKROOM_API_URL";

/// Base URL used when [`API_URL_ENV`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:4173";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Build a config from an absolute `http`/`https` base URL.
    ///
    /// The base may carry a path prefix (`https://host/shop`); API paths are
    /// appended below it.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        Ok(Self { base_url: url })
    }

    /// Read [`API_URL_ENV`], falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `segments` below the base; each segment is
    /// percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments() {
        let config = ClientConfig::new("http://localhost:4173").unwrap();
        assert_eq!(
            config.endpoint(&["api", "products"]).as_str(),
            "http://localhost:4173/api/products"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_and_ignores_trailing_slash() {
        let config = ClientConfig::new("https://example.com/shop/").unwrap();
        assert_eq!(
            config.endpoint(&["api", "products", "42", "quantity"]).as_str(),
            "https://example.com/shop/api/products/42/quantity"
        );
    }

    #[test]
    fn endpoint_encodes_segments() {
        let config = ClientConfig::new("http://localhost").unwrap();
        let url = config.endpoint(&["api", "products", "a b?c"]);
        assert_eq!(url.as_str(), "http://localhost/api/products/a%20b%3Fc");
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(ClientConfig::new("/api").is_err());
        assert!(ClientConfig::new("mailto:ops@example.com").is_err());
        assert!(ClientConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:4173/");
    }
}
