pub mod catalogs;
pub mod definition;
pub mod enumeration;
pub mod error;
pub mod ffi;
pub mod item;
pub mod probe;

pub use catalogs::{is_reserved_key, MAX_FLAG_ITEMS, RESERVED_KEYS};
pub use definition::Definition;
pub use enumeration::{create_enum, Enum};
pub use error::{EnumError, ItemPart, Result};
pub use ffi::{create_enum_to_json, lookup_to_json};
pub use item::EnumItem;
pub use probe::Probe;
