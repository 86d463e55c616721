//! The Value type - a tree-shaped data structure.
//!
//! A dynamically-typed tree for data arriving from schemaless sources.
//! Nesting lives in the `Map` variant; every other variant is a leaf that
//! the transforms carry through untouched.

use std::collections::BTreeMap;

use crate::Key;

/// A hierarchical mapping: the input and output shape of the transforms.
pub type Map = BTreeMap<Key, Value>;

/// A tree-shaped value.
///
/// # Design Notes
///
/// - `Map` is a `BTreeMap`, so iteration order is deterministic and the
///   order-sensitive conflict handling in unflatten is reproducible
/// - `Bytes` exists for binary-capable formats (CBOR, MessagePack);
///   JSON-facing layers encode it as base64
/// - Integers are `i64`, wide enough for everything this feeds
/// - Arrays are leaves: array indices are not path components
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value. A present leaf, distinct from a missing entry.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// Double-precision float.
    Float(f64),
    /// Owned UTF-8 text.
    String(String),
    /// Raw bytes, for formats that can carry them.
    Bytes(Vec<u8>),
    /// Sequence of values, carried as a single leaf.
    Array(Vec<Value>),
    /// Key-value map (the nesting part).
    Map(Map),
}

impl Value {
    /// Construct the null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Construct an empty map.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Construct an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// True if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// True if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Get a reference to a nested value by a separator-joined path.
    ///
    /// Each segment selects an entry of a `Map` value: the string key with
    /// exactly the segment's text, or failing that, the first key (in key
    /// order) whose canonical form equals the segment. So paths written by
    /// a stringifying flatten still reach their leaves. Returns `None` if
    /// the path doesn't exist or navigates into a non-map value.
    ///
    /// An empty separator never splits; the whole path is one segment.
    ///
    /// # Example
    ///
    /// ```
    /// use collection_literals::btree;
    /// use flatstruct_core::Value;
    ///
    /// let value = Value::Map(btree! {
    ///     "hello".into() => Value::Map(btree! {
    ///         "world".into() => Value::from(42),
    ///     }),
    /// });
    /// assert_eq!(value.get_path("hello/world", "/"), Some(&Value::from(42)));
    /// ```
    pub fn get_path(&self, path: &str, sep: &str) -> Option<&Value> {
        if sep.is_empty() {
            return self.get_segment(path);
        }
        let mut current = self;
        for segment in path.split(sep) {
            current = current.get_segment(segment)?;
        }
        Some(current)
    }

    /// Mutable variant of [`get_path`](Value::get_path).
    pub fn get_path_mut(&mut self, path: &str, sep: &str) -> Option<&mut Value> {
        if sep.is_empty() {
            return self.get_segment_mut(path);
        }
        let mut current = self;
        for segment in path.split(sep) {
            current = current.get_segment_mut(segment)?;
        }
        Some(current)
    }

    fn get_segment(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => {
                if let Some(found) = map.get(&Key::Str(segment.to_string())) {
                    return Some(found);
                }
                map.iter()
                    .find(|(key, _)| !key.is_str() && key.to_string() == segment)
                    .map(|(_, value)| value)
            }
            _ => None,
        }
    }

    fn get_segment_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => {
                let string_key = Key::Str(segment.to_string());
                if map.contains_key(&string_key) {
                    return map.get_mut(&string_key);
                }
                let fallback = map
                    .keys()
                    .find(|key| !key.is_str() && key.to_string() == segment)
                    .cloned()?;
                map.get_mut(&fallback)
            }
            _ => None,
        }
    }
}

// From impls for leaf literals

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn get_path_walks_nested_maps() {
        let value = Value::Map(btree! {
            "hello".into() => Value::Map(btree! {
                "world".into() => Value::from("there"),
            }),
        });

        assert_eq!(
            value.get_path("hello/world", "/"),
            Some(&Value::from("there"))
        );
        assert!(value.get_path("hello", "/").unwrap().is_map());
        assert_eq!(value.get_path("hello/missing", "/"), None);
        // Can't navigate into a leaf
        assert_eq!(value.get_path("hello/world/deeper", "/"), None);
    }

    #[test]
    fn get_path_matches_canonical_forms() {
        let value = Value::Map(btree! {
            Key::Int(7) => Value::from(true),
            Key::Null => Value::from("sentinel"),
        });

        assert_eq!(value.get_path("7", "/"), Some(&Value::from(true)));
        assert_eq!(value.get_path("null", "/"), Some(&Value::from("sentinel")));
        assert_eq!(value.get_path("8", "/"), None);
    }

    #[test]
    fn get_path_prefers_exact_string_keys() {
        let value = Value::Map(btree! {
            Key::Int(1) => Value::from("int"),
            Key::Str("1".into()) => Value::from("str"),
        });

        assert_eq!(value.get_path("1", "/"), Some(&Value::from("str")));
    }

    #[test]
    fn get_path_mut_allows_in_place_edits() {
        let mut value = Value::Map(btree! {
            "config".into() => Value::Map(btree! {
                "port".into() => Value::from(80),
            }),
        });

        if let Some(port) = value.get_path_mut("config/port", "/") {
            *port = Value::from(8080);
        }
        assert_eq!(value.get_path("config/port", "/"), Some(&Value::from(8080)));
    }

    #[test]
    fn empty_separator_is_a_single_segment() {
        let value = Value::Map(btree! {
            "a/b".into() => Value::from(1),
        });

        assert_eq!(value.get_path("a/b", ""), Some(&Value::from(1)));
    }

    #[test]
    fn empty_segments_are_ordinary_keys() {
        let value = Value::Map(btree! {
            "".into() => Value::Map(btree! {
                "x".into() => Value::from(2),
            }),
        });

        assert_eq!(value.get_path("/x", "/"), Some(&Value::from(2)));
    }
}
