use std::ops::Index;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::catalogs::is_reserved_key;
use crate::definition::Definition;
use crate::error::{EnumError, Result};
use crate::item::EnumItem;
use crate::probe::Probe;

/// A named, fixed collection of [`EnumItem`]s.
///
/// Items keep their definition order. The collection cannot change after
/// construction, so an `Enum` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    items: IndexMap<String, EnumItem>,
}

/// Enums are equal when they share a name and the same items in the same order.
impl PartialEq for Enum {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.items.iter().eq(other.items.iter())
    }
}

impl Eq for Enum {}

/// Build an enum from a name and a definition.
///
/// ```
/// use flagenum_core::create_enum;
///
/// let color = create_enum("Color", ["RED", "GREEN", "BLUE"]).unwrap();
/// assert_eq!(color.get_value("BLUE"), Some(4));
/// assert_eq!(color.get_key(2), Some("GREEN"));
/// ```
pub fn create_enum(name: impl Into<String>, definition: impl Into<Definition>) -> Result<Enum> {
    Enum::new(name, definition)
}

impl Enum {
    pub fn new(name: impl Into<String>, definition: impl Into<Definition>) -> Result<Self> {
        let name = name.into();
        let entries = definition.into().into_entries()?;

        let mut items: IndexMap<String, EnumItem> = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            if let Some(key) = key.as_deref().filter(|key| is_reserved_key(key)) {
                return Err(EnumError::ReservedKey(key.to_string()));
            }
            let item = EnumItem::try_new(key, value)?;
            if let Some(previous) = items.insert(item.key().to_string(), item) {
                warn!(
                    enum_name = %name,
                    key = previous.key(),
                    replaced = previous.value(),
                    "duplicate enum key replaces earlier value"
                );
            }
        }

        debug!(enum_name = %name, items = items.len(), "built enum");
        Ok(Self { name, items })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in definition order.
    pub fn enums(&self) -> impl ExactSizeIterator<Item = &EnumItem> + DoubleEndedIterator {
        self.items.values()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EnumItem> + DoubleEndedIterator {
        self.items.values()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.items.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = i64> + DoubleEndedIterator + '_ {
        self.items.values().map(EnumItem::value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Typed accessor for the item named `key`.
    pub fn item(&self, key: &str) -> Option<&EnumItem> {
        self.items.get(key)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Resolve `probe` to an item.
    ///
    /// Text looks up by key, an item looks up by that item's key, and a
    /// number returns the first item in definition order with that value.
    /// Misses and absent probes yield `None`.
    pub fn get<'p>(&self, probe: impl Into<Probe<'p>>) -> Option<&EnumItem> {
        let probe = probe.into();
        let found = match probe {
            Probe::Absent => None,
            Probe::Key(key) => self.get_by_key(key),
            Probe::Item(item) => self.get_by_item(item),
            Probe::Value(value) => self.get_by_value(value),
        };
        if found.is_none() {
            trace!(enum_name = %self.name, ?probe, "enum lookup missed");
        }
        found
    }

    pub fn get_by_key(&self, key: &str) -> Option<&EnumItem> {
        self.items.get(key)
    }

    /// Item with the same key as `item`. The value of `item` is ignored,
    /// so an item from another enum resolves to the same-named item here.
    pub fn get_by_item(&self, item: &EnumItem) -> Option<&EnumItem> {
        self.items.get(item.key())
    }

    pub fn get_by_value(&self, value: i64) -> Option<&EnumItem> {
        self.items.values().find(|item| item.is(value))
    }

    pub fn get_key<'p>(&self, probe: impl Into<Probe<'p>>) -> Option<&str> {
        self.get(probe).map(EnumItem::key)
    }

    pub fn get_value<'p>(&self, probe: impl Into<Probe<'p>>) -> Option<i64> {
        self.get(probe).map(EnumItem::value)
    }

    pub fn contains<'p>(&self, probe: impl Into<Probe<'p>>) -> bool {
        self.get(probe).is_some()
    }
}

impl Index<&str> for Enum {
    type Output = EnumItem;

    fn index(&self, key: &str) -> &EnumItem {
        match self.items.get(key) {
            Some(item) => item,
            None => panic!("enum \"{}\" has no item \"{}\"", self.name, key),
        }
    }
}

impl<'a> IntoIterator for &'a Enum {
    type Item = &'a EnumItem;
    type IntoIter = indexmap::map::Values<'a, String, EnumItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

/// Numeric projection of the whole enum:
/// `{"name": .., "enums": [values..], "<KEY>": value, ..}`.
impl Serialize for Enum {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len() + 2))?;
        map.serialize_entry("name", &self.name)?;
        let enums: Vec<&EnumItem> = self.items.values().collect();
        map.serialize_entry("enums", &enums)?;
        for (key, item) in &self.items {
            map.serialize_entry(key, item)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Enum {
        Enum::new(
            "Color",
            Definition::mapping([("RED", 1), ("GREEN", 2), ("BLUE", 4)]),
        )
        .unwrap()
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_value() {
        let e = Enum::new("Dup", ["A", "B", "A"]).unwrap();
        assert_eq!(e.len(), 2);
        assert_eq!(e.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(e.get_value("A"), Some(4));
        assert_eq!(e.get_value("B"), Some(2));
        assert_eq!(e.get(1), None);
    }

    #[test]
    fn get_by_value_returns_first_of_shared_values() {
        let e = Enum::new("Alias", Definition::mapping([("ON", 1), ("YES", 1), ("OFF", 0)]))
            .unwrap();
        assert_eq!(e.get_key(1), Some("ON"));
        assert_eq!(e.get_key(0), Some("OFF"));
    }

    #[test]
    fn get_by_item_checks_first_item() {
        let e = color();
        let red = e.item("RED").unwrap().clone();
        assert!(std::ptr::eq(e.get(&red).unwrap(), &e["RED"]));
    }

    #[test]
    fn equality_respects_item_order() {
        let forward = Enum::new("Pair", Definition::mapping([("A", 1), ("B", 2)])).unwrap();
        let reversed = Enum::new("Pair", Definition::mapping([("B", 2), ("A", 1)])).unwrap();
        let renamed = Enum::new("Other", Definition::mapping([("A", 1), ("B", 2)])).unwrap();
        assert_eq!(forward, pair_sequence());
        assert_ne!(forward, reversed);
        assert_ne!(forward, renamed);
    }

    fn pair_sequence() -> Enum {
        Enum::new("Pair", ["A", "B"]).unwrap()
    }

    #[test]
    #[should_panic(expected = "has no item \"PURPLE\"")]
    fn index_missing_key_panics() {
        let e = color();
        let _ = &e["PURPLE"];
    }
}
