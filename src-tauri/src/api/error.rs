//! API Errors

use thiserror::Error;

/// Errors that can occur when reading the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API does not know this product.
    #[error("Product {0} not found")]
    NotFound(u32),

    /// Any other non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for `ApiError`.
pub type ApiResult<T> = Result<T, ApiError>;
