//! Store Command Wrappers
//!
//! Frontend bindings to the external document store, organized by domain.
//! The page installs the store as `window.__MENU_STORE__.invoke(cmd, args)`.

mod item;
mod reward;
mod shop;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__MENU_STORE__"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use item::*;
pub use reward::*;
pub use shop::*;

/// Serialize command arguments; `None` becomes `null`, maps become objects
fn to_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    args.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

/// Message of a rejected store call, empty when it carried none
fn error_message(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_default()
}

async fn call(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    invoke(cmd, args).await.map_err(|e| {
        let message = error_message(&e);
        log::warn!("[STORE] {} failed: {}", cmd, message);
        message
    })
}

/// `null`/`undefined` answers mean "no such document"
async fn call_optional<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<Option<T>, String> {
    let result = call(cmd, args).await?;
    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(result).map(Some).map_err(|e| e.to_string())
}
