//! Flattening a nested mapping into a single level.
//!
//! Composite keys are the separator-joined path of the leaf they address:
//! `{"a": {"b": 1}}` flattens to `{"a/b": 1}` with the default separator.

use crate::{Error, Key, Map, Value};

/// Options for [`flatten_with`].
#[derive(Clone, Debug)]
pub struct FlattenOptions {
    /// Separator joining path segments in composite keys
    pub separator: String,

    /// Fail on non-string keys instead of replacing them with their
    /// canonical string form
    pub reject_non_string_keys: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            reject_non_string_keys: true,
        }
    }
}

impl FlattenOptions {
    /// Use a different separator between path segments.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace non-string keys with their canonical string form instead of
    /// failing on them.
    pub fn with_stringified_keys(mut self) -> Self {
        self.reject_non_string_keys = false;
        self
    }
}

/// Flatten a nested mapping into a single-level one with default options.
///
/// Equivalent to [`flatten_with`] with [`FlattenOptions::default`].
///
/// # Example
///
/// ```
/// use collection_literals::btree;
/// use flatstruct_core::{flatten, Value};
///
/// let nested = btree! {
///     "a".into() => Value::from(1),
///     "b".into() => Value::Map(btree! {
///         "c".into() => Value::from(2),
///     }),
/// };
///
/// let flat = flatten(&nested)?;
/// assert_eq!(flat, btree! {
///     "a".into() => Value::from(1),
///     "b/c".into() => Value::from(2),
/// });
/// # Ok::<(), flatstruct_core::Error>(())
/// ```
pub fn flatten(input: &Map) -> Result<Map, Error> {
    flatten_with(input, &FlattenOptions::default())
}

/// Flatten a nested mapping into a single-level one.
///
/// Entries whose value is a sub-mapping are replaced by that sub-mapping's
/// flattened entries, each key prefixed with the entry's own key plus the
/// separator. Every other value is a leaf and is carried over unchanged, so
/// an already-flat mapping comes back as-is. Empty sub-mappings have no
/// entries to contribute and disappear.
///
/// When two entries produce the same composite key (a key containing the
/// separator verbatim, or a stringified non-string key colliding with a
/// string key), the entry iterated later wins.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyKind`] for a non-string key at any depth when
/// `reject_non_string_keys` is set.
pub fn flatten_with(input: &Map, options: &FlattenOptions) -> Result<Map, Error> {
    let mut output = Map::new();
    for (key, value) in input {
        let segment = key.to_segment(options.reject_non_string_keys)?;
        match value {
            Value::Map(inner) => {
                for (sub_key, sub_value) in flatten_with(inner, options)? {
                    let joined = format!("{}{}{}", segment, options.separator, sub_key);
                    output.insert(Key::Str(joined), sub_value);
                }
            }
            leaf => {
                output.insert(Key::Str(segment), leaf.clone());
            }
        }
    }
    Ok(output)
}
