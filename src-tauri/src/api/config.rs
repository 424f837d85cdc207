//! API Configuration
//!
//! Where the catalog lives. Built in code; the app reads no environment
//! variables or config files.

/// Public host serving the product catalog
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Catalog API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Point the client at another host (a local test server, a mirror)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` target for the whole collection
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// `GET` target for a single product
    pub fn product_url(&self, id: u32) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_host() {
        let config = ApiConfig::default();
        assert_eq!(config.products_url(), "https://dummyjson.com/products");
        assert_eq!(config.product_url(7), "https://dummyjson.com/products/7");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.product_url(1), "http://127.0.0.1:4000/products/1");
    }
}
