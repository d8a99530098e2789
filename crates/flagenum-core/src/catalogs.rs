use std::collections::HashSet;
use std::sync::LazyLock;

/// Identifiers used by the enum's own interface.
/// A definition key matching one of these is rejected at construction.
pub static RESERVED_KEYS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("name");
    s.insert("enums");
    s.insert("getKey");
    s.insert("getValue");
    s.insert("get");
    s
});

/// Number of distinct positive bit flags an `i64` value can carry.
/// A sequence definition may hold at most this many keys.
pub const MAX_FLAG_ITEMS: usize = 63;

/// Returns true if `key` collides with a reserved identifier.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys_are_exact_matches() {
        for key in ["name", "enums", "getKey", "getValue", "get"] {
            assert!(is_reserved_key(key), "{key} should be reserved");
        }
        assert!(!is_reserved_key("Name"));
        assert!(!is_reserved_key("getkey"));
        assert!(!is_reserved_key("getter"));
        assert!(!is_reserved_key(""));
    }

    #[test]
    fn max_flag_items_fits_in_i64() {
        assert_eq!(1i64 << (MAX_FLAG_ITEMS - 1), 1i64 << 62);
        assert!((1i64 << (MAX_FLAG_ITEMS - 1)) > 0);
    }
}
