//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod product;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the backend's error string when a command returns `Err`
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected `invoke` into the error string the backend sent
fn invoke_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use product::*;
