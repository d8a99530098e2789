use crate::item::EnumItem;

/// The input to an enum lookup.
///
/// Each shape selects one lookup strategy: `Key` matches item keys,
/// `Item` matches by the other item's key, and `Value` matches item values.
/// `Absent` never matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<'a> {
    Absent,
    Key(&'a str),
    Item(&'a EnumItem),
    Value(i64),
}

impl<'a> From<&'a str> for Probe<'a> {
    fn from(key: &'a str) -> Self {
        Probe::Key(key)
    }
}

impl<'a> From<&'a String> for Probe<'a> {
    fn from(key: &'a String) -> Self {
        Probe::Key(key.as_str())
    }
}

impl<'a> From<&'a EnumItem> for Probe<'a> {
    fn from(item: &'a EnumItem) -> Self {
        Probe::Item(item)
    }
}

impl From<i64> for Probe<'_> {
    fn from(value: i64) -> Self {
        Probe::Value(value)
    }
}

impl From<i32> for Probe<'_> {
    fn from(value: i32) -> Self {
        Probe::Value(i64::from(value))
    }
}

impl From<u32> for Probe<'_> {
    fn from(value: u32) -> Self {
        Probe::Value(i64::from(value))
    }
}

impl<'a, T: Into<Probe<'a>>> From<Option<T>> for Probe<'a> {
    fn from(probe: Option<T>) -> Self {
        probe.map_or(Probe::Absent, Into::into)
    }
}
