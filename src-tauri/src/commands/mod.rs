//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod product_cmd;

pub use product_cmd::*;
