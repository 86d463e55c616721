//! The Key type - a mapping key that is not necessarily a string.
//!
//! Mappings arriving from dynamically-typed sources can be keyed by more
//! than strings. `Key` models the kinds the transforms accept; its `Display`
//! form is the canonical string used when a non-string key has to become a
//! path segment.

use std::fmt;

use crate::Error;

/// A mapping key.
///
/// Keys are totally ordered (`Null < Bool < Int < Str`, then by value),
/// which fixes the iteration order of a [`Map`](crate::Map) and makes the
/// transforms deterministic.
///
/// # Design Notes
///
/// - No float variant: keys live in a `BTreeMap` and need a total order.
/// - `Display` gives the canonical string form (`null`, `true`/`false`,
///   decimal digits, string contents verbatim).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// The null key. Also the default duplicate-key placeholder.
    #[default]
    Null,
    /// Boolean key.
    Bool(bool),
    /// Signed 64-bit integer key.
    Int(i64),
    /// UTF-8 string key (the common case).
    Str(String),
}

impl Key {
    /// Check if this key is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// Borrow the string contents, if this key is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Name of this key's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Key::Null => "null",
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Str(_) => "string",
        }
    }

    /// Path-segment form of this key under the given key policy.
    ///
    /// String keys pass through; any other kind either fails or takes its
    /// canonical form.
    pub(crate) fn to_segment(&self, reject_non_string: bool) -> Result<String, Error> {
        match self {
            Key::Str(s) => Ok(s.clone()),
            other if reject_non_string => Err(Error::InvalidKeyKind { key: other.clone() }),
            other => Ok(other.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "null"),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

// Conversion from common types

impl From<bool> for Key {
    fn from(v: bool) -> Self {
        Key::Bool(v)
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Int(v as i64)
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_gives_canonical_form() {
        assert_eq!(Key::Null.to_string(), "null");
        assert_eq!(Key::Bool(true).to_string(), "true");
        assert_eq!(Key::Bool(false).to_string(), "false");
        assert_eq!(Key::Int(1010101).to_string(), "1010101");
        assert_eq!(Key::Int(-7).to_string(), "-7");
        assert_eq!(Key::Str("hello".into()).to_string(), "hello");
    }

    #[test]
    fn ordering_is_by_kind_then_value() {
        assert!(Key::Null < Key::Bool(false));
        assert!(Key::Bool(true) < Key::Int(i64::MIN));
        assert!(Key::Int(i64::MAX) < Key::Str(String::new()));
        assert!(Key::Str("a".into()) < Key::Str("b".into()));
    }

    #[test]
    fn segment_policy() {
        assert_eq!(Key::from("x").to_segment(true).unwrap(), "x");
        assert_eq!(Key::Int(5).to_segment(false).unwrap(), "5");
        assert!(matches!(
            Key::Int(5).to_segment(true),
            Err(Error::InvalidKeyKind { key: Key::Int(5) })
        ));
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Key::from("x"), Key::Str("x".into()));
        assert_eq!(Key::from("x".to_string()), Key::Str("x".into()));
        assert_eq!(Key::from(5i64), Key::Int(5));
        assert_eq!(Key::from(5i32), Key::Int(5));
        assert_eq!(Key::from(true), Key::Bool(true));
    }
}
