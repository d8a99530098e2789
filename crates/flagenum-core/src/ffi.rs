//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings,
//! minimizing the FFI surface area. Nothing is kept between calls:
//! every call rebuilds the enum from its definition.

use serde::Serialize;
use serde_json::Value;

use crate::definition::{json_type_name, number_to_i64, Definition};
use crate::enumeration::Enum;
use crate::error::EnumError;
use crate::item::EnumItem;
use crate::probe::Probe;

// ---------------------------------------------------------------------------
// Result types (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a lookup. Both fields are `null` on a miss.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub key: Option<String>,
    pub value: Option<i64>,
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Build an enum and return its numeric projection as JSON.
///
/// Input: enum name + JSON definition (array of keys or object of values)
/// Output: `{ success, data?: { name, enums, <KEY>: value, ... }, error? }`
pub fn create_enum_to_json(name: &str, definition_json: &str) -> String {
    match build_enum(name, definition_json) {
        Ok(e) => success(e),
        Err(message) => failure(message),
    }
}

/// Build an enum and resolve one probe against it.
///
/// Probe JSON: a string looks up by key, a number by value, `null` is an
/// absent probe, and `{ "key": ..., "value": ... }` looks up by item.
/// Output: `{ success, data?: { key, value }, error? }`
pub fn lookup_to_json(name: &str, definition_json: &str, probe_json: &str) -> String {
    let e = match build_enum(name, definition_json) {
        Ok(e) => e,
        Err(message) => return failure(message),
    };

    let probe_value: Value = match serde_json::from_str(probe_json) {
        Ok(v) => v,
        Err(err) => return failure(format!("Invalid probe JSON: {err}")),
    };

    // Holds an item probe so the borrowed `Probe` can point at it.
    let probe_item: EnumItem;
    let probe = match &probe_value {
        Value::Null => Probe::Absent,
        Value::String(key) => Probe::Key(key.as_str()),
        // A non-integral number cannot equal any value.
        Value::Number(_) => match number_to_i64(&probe_value) {
            Some(value) => Probe::Value(value),
            None => return success(LookupResult { key: None, value: None }),
        },
        Value::Object(fields) => {
            probe_item = match item_from_json(fields) {
                Ok(item) => item,
                Err(message) => return failure(message),
            };
            Probe::Item(&probe_item)
        }
        other => {
            return failure(format!(
                "Unsupported probe: expected a string, number, object or null, got {}",
                json_type_name(other)
            ))
        }
    };

    let found = e.get(probe);
    success(LookupResult {
        key: found.map(|item| item.key().to_string()),
        value: found.map(EnumItem::value),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_enum(name: &str, definition_json: &str) -> Result<Enum, String> {
    let json: Value = serde_json::from_str(definition_json)
        .map_err(|err| format!("Invalid definition JSON: {err}"))?;
    let definition = Definition::from_json(&json).map_err(|err| err.to_string())?;
    Enum::new(name, definition).map_err(|err| err.to_string())
}

/// A missing or `null` field is an absent part; a field of the wrong type is
/// reported as such rather than as missing.
fn item_from_json(fields: &serde_json::Map<String, Value>) -> Result<EnumItem, String> {
    let key = match fields.get("key") {
        None | Some(Value::Null) => None,
        Some(Value::String(key)) => Some(key.as_str()),
        Some(other) => {
            return Err(format!(
                "Invalid item: key must be a string, got {}",
                json_type_name(other)
            ))
        }
    };
    let value = match fields.get("value") {
        None | Some(Value::Null) => None,
        Some(value @ Value::Number(_)) => match number_to_i64(value) {
            Some(value) => Some(value),
            None => return Err(format!("Invalid item: value must be an integer, got {value}")),
        },
        Some(other) => {
            return Err(format!(
                "Invalid item: value must be an integer, got {}",
                json_type_name(other)
            ))
        }
    };
    EnumItem::try_new(key, value).map_err(|err: EnumError| err.to_string())
}

fn success<T: Serialize>(data: T) -> String {
    let result = FfiResult {
        success: true,
        data: Some(data),
        error: None,
    };
    serde_json::to_string(&result)
        .unwrap_or_else(|err| failure(format!("JSON serialization error: {err}")))
}

fn failure(message: impl Into<String>) -> String {
    serde_json::json!({
        "success": false,
        "error": message.into(),
    })
    .to_string()
}
