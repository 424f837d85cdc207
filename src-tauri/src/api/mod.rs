//! API Layer
//!
//! Read-only access to the remote product catalog.

mod config;
mod error;
mod traits;
mod client;

#[cfg(test)]
mod tests;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use traits::ProductSource;
pub use client::DummyJsonClient;
