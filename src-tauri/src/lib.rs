//! Catalog Backend
//!
//! Layered architecture:
//! - domain: Product entities as the catalog API shapes them
//! - api: HTTP access to the catalog behind the `ProductSource` trait
//! - commands: Tauri command handlers

use std::sync::Arc;
use tracing::info;

mod domain;
mod api;
mod commands;
mod logging;

use api::{ApiConfig, DummyJsonClient, ProductSource};

/// Application state shared across commands
pub struct AppState {
    pub products: Arc<dyn ProductSource>,
}

impl AppState {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            products: Arc::new(DummyJsonClient::new(config)),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init_logging();

    let config = ApiConfig::default();
    info!(base_url = %config.base_url, "Catalog backend starting");

    tauri::Builder::default()
        .manage(AppState::new(&config))
        .invoke_handler(tauri::generate_handler![
            commands::fetch_products,
            commands::fetch_product,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
