//! DummyJSON Client
//!
//! `reqwest`-backed implementation of `ProductSource`. Every call is a single
//! `GET`; there is no caching, retry or timeout.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::domain::{ProductDetail, ProductPage, ProductSummary};
use super::{ApiConfig, ApiError, ApiResult, ProductSource};

/// Client for the public product catalog.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct DummyJsonClient {
    inner: Arc<DummyJsonClientInner>,
}

struct DummyJsonClientInner {
    client: reqwest::Client,
    config: ApiConfig,
}

impl DummyJsonClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            inner: Arc::new(DummyJsonClientInner {
                client: reqwest::Client::new(),
                config: config.clone(),
            }),
        }
    }

    /// Fetch the collection envelope, including its paging counters.
    #[instrument(skip(self))]
    pub async fn fetch_page(&self) -> ApiResult<ProductPage> {
        let url = self.inner.config.products_url();
        let page: ProductPage = self.get_json(&url, None).await?;
        debug!(
            total = page.total,
            skip = page.skip,
            limit = page.limit,
            "Decoded product page"
        );
        Ok(page)
    }

    /// Send one `GET` and decode the body.
    ///
    /// `product_id` turns a 404 into `ApiError::NotFound`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        product_id: Option<u32>,
    ) -> ApiResult<T> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = product_id {
                return Err(ApiError::NotFound(id));
            }
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        // Read as text first so decode errors point at the body, not the socket
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductSource for DummyJsonClient {
    async fn list_products(&self) -> ApiResult<Vec<ProductSummary>> {
        let page = self.fetch_page().await?;
        info!(count = page.products.len(), "Fetched product collection");
        Ok(page.products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: u32) -> ApiResult<ProductDetail> {
        let url = self.inner.config.product_url(id);
        let detail: ProductDetail = self.get_json(&url, Some(id)).await?;
        info!(
            id = detail.id,
            reviews = detail.reviews.len(),
            "Fetched product detail"
        );
        Ok(detail)
    }
}
