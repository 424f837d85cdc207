//! Logging Setup
//!
//! Installs a `tracing` fmt subscriber for the backend.

use tracing_subscriber::EnvFilter;

/// Our own crate logs at debug, dependencies (hyper, tao) at info
const DEFAULT_FILTER: &str = "info,catalog_lib=debug";

/// Install the global subscriber; later calls are ignored
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_target(false)
        .try_init();
}
