//! Construction errors.
//!
//! Lookups never fail: a miss is reported as `None`. Every variant here is
//! raised while building an [`EnumItem`](crate::EnumItem) or an
//! [`Enum`](crate::Enum) and aborts that construction.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnumError>;

/// Which half of an item was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPart {
    Key,
    Value,
}

impl fmt::Display for ItemPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemPart::Key => f.write_str("key"),
            ItemPart::Value => f.write_str("value"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// An item was constructed without a key or without a value.
    #[error("EnumItem key and/or value is invalid (missing {0})")]
    InvalidItem(ItemPart),

    /// A definition key collides with a reserved identifier.
    #[error("Enum key \"{0}\" is a reserved word")]
    ReservedKey(String),

    /// A JSON definition has the wrong shape.
    #[error("invalid enum definition: {0}")]
    InvalidDefinition(String),

    /// A sequence definition has more keys than available flag bits.
    #[error("enum sequence has {count} keys but only {max} bit flags are available")]
    TooManyFlags { count: usize, max: usize },
}
