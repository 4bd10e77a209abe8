//! WASM bindings for classmix-core.
//!
//! Exposes `join` as a `#[wasm_bindgen]` function for JS/TS component code.
//! Arguments travel as one JSON-encoded array — the same shapes a JS caller
//! composes anyway (strings, numbers, nested arrays, condition mappings).
//! Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p classmix-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/classmix-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/classmix_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Join a JSON-encoded argument list into a space-separated class string.
///
/// Returns the class string, or throws a JS error if the input is not valid
/// JSON.
#[wasm_bindgen]
pub fn join(args_json: &str) -> std::result::Result<String, JsValue> {
    classmix_core::join_json(args_json).map_err(|e| JsValue::from_str(&e.to_string()))
}
