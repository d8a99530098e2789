use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{EnumError, ItemPart, Result};
use crate::probe::Probe;

/// A single `(key, value)` pair belonging to an [`Enum`](crate::Enum).
///
/// Items are immutable. Two items are equal when both key and value match;
/// ordering follows the value, with the key breaking ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumItem {
    key: String,
    value: i64,
}

impl EnumItem {
    /// Build an item, rejecting an absent key or an absent value.
    pub fn try_new<K: Into<String>>(key: Option<K>, value: Option<i64>) -> Result<Self> {
        let key = key.ok_or(EnumError::InvalidItem(ItemPart::Key))?;
        let value = value.ok_or(EnumError::InvalidItem(ItemPart::Value))?;
        Ok(Self {
            key: key.into(),
            value,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Numeric projection of the item.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Checks whether this item matches `probe`.
    ///
    /// Text is compared against the key, another item is compared by key
    /// only, and a number is compared against the value. An absent probe
    /// never matches.
    pub fn is<'p>(&self, probe: impl Into<Probe<'p>>) -> bool {
        match probe.into() {
            Probe::Absent => false,
            Probe::Key(key) => self.key == key,
            Probe::Item(other) => self.key == other.key,
            Probe::Value(value) => self.value == value,
        }
    }
}

impl fmt::Display for EnumItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[key: {}, value: {}]", self.key, self.value)
    }
}

// ---------------------------------------------------------------------------
// Numeric projection
// ---------------------------------------------------------------------------

impl Serialize for EnumItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl From<&EnumItem> for i64 {
    fn from(item: &EnumItem) -> Self {
        item.value
    }
}

impl From<EnumItem> for i64 {
    fn from(item: EnumItem) -> Self {
        item.value
    }
}

// ---------------------------------------------------------------------------
// Comparison by value
// ---------------------------------------------------------------------------

impl PartialEq<i64> for EnumItem {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialEq<EnumItem> for i64 {
    fn eq(&self, other: &EnumItem) -> bool {
        *self == other.value
    }
}

impl PartialOrd<i64> for EnumItem {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl PartialOrd<EnumItem> for i64 {
    fn partial_cmp(&self, other: &EnumItem) -> Option<Ordering> {
        Some(self.cmp(&other.value))
    }
}

impl Ord for EnumItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for EnumItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
