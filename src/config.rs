//! Client configuration.
//!
//! The base URL is resolved once at startup and handed to everything that
//! talks to the backend.

use crate::error::CatalogError;

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8084";

/// Environment variable consulted for the base URL.
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";

const PRODUCTS_PATH: &str = "/products";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalize a base URL.
    ///
    /// Surrounding whitespace and trailing slashes are dropped.
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());

        if !has_host {
            return Err(CatalogError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Resolve from an optional override, falling back to the default.
    pub fn resolve(base_url: Option<&str>) -> Result<Self, CatalogError> {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint for products.
    pub fn products_url(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_products_url() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8084");
        assert_eq!(config.products_url(), "http://localhost:8084/products");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new(" https://api.example.com/ ").unwrap();
        assert_eq!(config.products_url(), "https://api.example.com/products");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let err = ClientConfig::new("localhost:8084").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_empty_host() {
        assert!(ClientConfig::new("http://").is_err());
        assert!(ClientConfig::new("").is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(ClientConfig::resolve(None).unwrap(), ClientConfig::default());
        assert_eq!(
            ClientConfig::resolve(Some("  ")).unwrap(),
            ClientConfig::default()
        );
        assert_eq!(
            ClientConfig::resolve(Some("http://backend:9000"))
                .unwrap()
                .products_url(),
            "http://backend:9000/products"
        );
    }
}
