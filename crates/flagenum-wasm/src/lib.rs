//! flagenum WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen.
//! All functions take string inputs and return JSON strings.

use flagenum_core::{create_enum_to_json, lookup_to_json};
use wasm_bindgen::prelude::*;

/// Build an enum and return its numeric projection as JSON.
///
/// @param name - Enum name, used in diagnostics
/// @param definition_json - JSON array of keys, or object of key to integer value
/// @returns JSON string with `{ success: boolean, data?: { name, enums, [key]: value }, error?: string }`
#[wasm_bindgen(js_name = "createEnum")]
pub fn wasm_create_enum(name: &str, definition_json: &str) -> String {
    create_enum_to_json(name, definition_json)
}

/// Resolve a key, value, or item against an enum definition.
///
/// @param name - Enum name
/// @param definition_json - JSON array of keys, or object of key to integer value
/// @param probe_json - JSON string (key), number (value), `{ key, value }` (item) or `null`
/// @returns JSON string with `{ success: boolean, data?: { key, value }, error?: string }`
#[wasm_bindgen(js_name = "lookup")]
pub fn wasm_lookup(name: &str, definition_json: &str, probe_json: &str) -> String {
    lookup_to_json(name, definition_json, probe_json)
}
