//! Enum definitions: an ordered list of keys numbered as bit flags, or an
//! explicit key to value mapping.

use indexmap::IndexMap;
use serde_json::Value;

use crate::catalogs::MAX_FLAG_ITEMS;
use crate::error::{EnumError, Result};

/// An absent key or value (`None`) is kept as given and rejected when the
/// enum is built, in entry order, after the reserved-key check of that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// Keys in order; the key at position `i` gets the value `2^i`.
    Sequence(Vec<Option<String>>),
    /// Explicit `(key, value)` pairs, used verbatim in this order.
    Mapping(Vec<(String, Option<i64>)>),
}

impl Definition {
    pub fn sequence<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Definition::Sequence(keys.into_iter().map(|key| Some(key.into())).collect())
    }

    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Definition::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), Some(value)))
                .collect(),
        )
    }

    /// Parse a JSON definition.
    ///
    /// An array is a sequence: strings are used as keys, numbers and booleans
    /// are stringified, and `null` is an absent key (rejected at build time,
    /// not turned into the key `"null"`). An object is a mapping whose values
    /// must be integers; `null` is an absent value.
    pub fn from_json(json: &Value) -> Result<Self> {
        match json {
            Value::Array(entries) => entries
                .iter()
                .map(json_key)
                .collect::<Result<Vec<_>>>()
                .map(Definition::Sequence),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| json_value(key, value).map(|value| (key.clone(), value)))
                .collect::<Result<Vec<_>>>()
                .map(Definition::Mapping),
            other => Err(EnumError::InvalidDefinition(format!(
                "expected an array of keys or an object of values, got {}",
                json_type_name(other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Definition::Sequence(keys) => keys.len(),
            Definition::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve every entry to its `(key, value)` pair in definition order.
    pub(crate) fn into_entries(self) -> Result<Vec<(Option<String>, Option<i64>)>> {
        match self {
            Definition::Sequence(keys) => {
                if keys.len() > MAX_FLAG_ITEMS {
                    return Err(EnumError::TooManyFlags {
                        count: keys.len(),
                        max: MAX_FLAG_ITEMS,
                    });
                }
                Ok(keys
                    .into_iter()
                    .enumerate()
                    .map(|(idx, key)| (key, Some(1i64 << idx)))
                    .collect())
            }
            Definition::Mapping(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| (Some(key), value))
                .collect()),
        }
    }
}

impl TryFrom<&Value> for Definition {
    type Error = EnumError;

    fn try_from(json: &Value) -> Result<Self> {
        Definition::from_json(json)
    }
}

impl<const N: usize> From<[&str; N]> for Definition {
    fn from(keys: [&str; N]) -> Self {
        Definition::sequence(keys)
    }
}

impl From<&[&str]> for Definition {
    fn from(keys: &[&str]) -> Self {
        Definition::sequence(keys.iter().copied())
    }
}

impl From<Vec<&str>> for Definition {
    fn from(keys: Vec<&str>) -> Self {
        Definition::sequence(keys)
    }
}

impl From<Vec<String>> for Definition {
    fn from(keys: Vec<String>) -> Self {
        Definition::sequence(keys)
    }
}

impl From<Vec<(String, i64)>> for Definition {
    fn from(entries: Vec<(String, i64)>) -> Self {
        Definition::mapping(entries)
    }
}

impl From<IndexMap<String, i64>> for Definition {
    fn from(entries: IndexMap<String, i64>) -> Self {
        Definition::mapping(entries)
    }
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn json_key(entry: &Value) -> Result<Option<String>> {
    match entry {
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Null => Ok(None),
        other => Err(EnumError::InvalidDefinition(format!(
            "sequence keys must be strings, got {}",
            json_type_name(other)
        ))),
    }
}

fn json_value(key: &str, value: &Value) -> Result<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(_) => number_to_i64(value).map(Some).ok_or_else(|| {
            EnumError::InvalidDefinition(format!(
                "value of \"{key}\" must be an integer, got {value}"
            ))
        }),
        other => Err(EnumError::InvalidDefinition(format!(
            "value of \"{key}\" must be an integer, got {}",
            json_type_name(other)
        ))),
    }
}

/// Integral JSON number as `i64`. `2.0` is accepted, `2.5` is not.
pub(crate) fn number_to_i64(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sequence_entries_are_powers_of_two() {
        let entries = Definition::from(["A", "B", "C", "D"]).into_entries().unwrap();
        assert_eq!(
            entries,
            vec![
                (Some("A".to_string()), Some(1)),
                (Some("B".to_string()), Some(2)),
                (Some("C".to_string()), Some(4)),
                (Some("D".to_string()), Some(8)),
            ]
        );
    }

    #[test]
    fn sequence_flag_limit() {
        let keys: Vec<String> = (0..MAX_FLAG_ITEMS).map(|i| format!("K{i}")).collect();
        let entries = Definition::from(keys).into_entries().unwrap();
        assert_eq!(entries.last().unwrap().1, Some(1i64 << 62));

        let keys: Vec<String> = (0..=MAX_FLAG_ITEMS).map(|i| format!("K{i}")).collect();
        assert_eq!(
            Definition::from(keys).into_entries(),
            Err(EnumError::TooManyFlags {
                count: MAX_FLAG_ITEMS + 1,
                max: MAX_FLAG_ITEMS,
            })
        );
    }

    #[test]
    fn from_json_array_stringifies_scalars() {
        let def = Definition::from_json(&json!(["A", 2, true])).unwrap();
        assert_eq!(def.len(), 3);
        assert_eq!(def, Definition::sequence(["A", "2", "true"]));
        assert!(Definition::from_json(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn from_json_object_keeps_insertion_order() {
        let def = Definition::from_json(&json!({"Z": 26, "A": 1, "M": 13})).unwrap();
        assert_eq!(def, Definition::mapping([("Z", 26), ("A", 1), ("M", 13)]));
    }

    #[test]
    fn from_json_accepts_integral_floats() {
        let def = Definition::from_json(&json!({"A": 2.0})).unwrap();
        assert_eq!(def, Definition::mapping([("A", 2)]));
    }

    #[test]
    fn from_json_keeps_nulls_as_absent() {
        assert_eq!(
            Definition::from_json(&json!(["A", null])),
            Ok(Definition::Sequence(vec![Some("A".to_string()), None]))
        );
        assert_eq!(
            Definition::from_json(&json!({"A": null, "B": 2})),
            Ok(Definition::Mapping(vec![
                ("A".to_string(), None),
                ("B".to_string(), Some(2)),
            ]))
        );
    }

    #[test]
    fn from_json_rejects_bad_shapes() {
        assert!(matches!(
            Definition::from_json(&json!({"A": 1.5})),
            Err(EnumError::InvalidDefinition(_))
        ));
        assert!(matches!(
            Definition::from_json(&json!({"A": "one"})),
            Err(EnumError::InvalidDefinition(_))
        ));
        assert!(matches!(
            Definition::from_json(&json!([["nested"]])),
            Err(EnumError::InvalidDefinition(_))
        ));
        assert!(matches!(
            Definition::from_json(&json!("A")),
            Err(EnumError::InvalidDefinition(_))
        ));
    }
}
