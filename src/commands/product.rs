//! Product Commands
//!
//! Frontend bindings for the catalog reads.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{ProductDetail, ProductSummary};
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct ProductIdArgs {
    id: u32,
}

pub async fn fetch_products() -> Result<Vec<ProductSummary>, String> {
    let result = invoke("fetch_products", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn fetch_product(id: u32) -> Result<ProductDetail, String> {
    let js_args = serde_wasm_bindgen::to_value(&ProductIdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("fetch_product", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
