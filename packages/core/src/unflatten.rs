//! Unflattening a single-level mapping back into a nested one.
//!
//! The inverse of flattening: composite keys are split on the separator and
//! each segment becomes one level of nesting. Distinct flat keys can claim
//! the same path; the duplicate policy decides whether that is an error or
//! a relocation under a placeholder key.

use crate::{Error, Key, Map, Value};

/// Options for [`unflatten_with`].
#[derive(Clone, Debug)]
pub struct UnflattenOptions {
    /// Separator splitting composite keys into path segments
    pub separator: String,

    /// Fail when two flat keys claim the same path instead of relocating
    /// the later arrival under the placeholder
    pub reject_duplicate_keys: bool,

    /// Key a conflicting value is stored under when duplicates are merged
    pub duplicate_key_placeholder: Key,

    /// Fail on non-string keys instead of replacing them with their
    /// canonical string form
    pub reject_non_string_keys: bool,
}

impl Default for UnflattenOptions {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            reject_duplicate_keys: true,
            duplicate_key_placeholder: Key::Null,
            reject_non_string_keys: true,
        }
    }
}

impl UnflattenOptions {
    /// Use a different separator between path segments.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Merge conflicting keys under `placeholder` instead of failing.
    pub fn with_merged_duplicates(mut self, placeholder: impl Into<Key>) -> Self {
        self.reject_duplicate_keys = false;
        self.duplicate_key_placeholder = placeholder.into();
        self
    }

    /// Replace non-string keys with their canonical string form instead of
    /// failing on them.
    pub fn with_stringified_keys(mut self) -> Self {
        self.reject_non_string_keys = false;
        self
    }

    /// The placeholder key, checked against the key policy.
    ///
    /// The placeholder is configuration rather than input, so it is used
    /// verbatim: never stringified, never split. It still has to satisfy
    /// the strict key policy when that policy is in effect.
    fn placeholder(&self) -> Result<Key, Error> {
        if self.reject_non_string_keys && !self.duplicate_key_placeholder.is_str() {
            return Err(Error::InvalidKeyKind {
                key: self.duplicate_key_placeholder.clone(),
            });
        }
        Ok(self.duplicate_key_placeholder.clone())
    }
}

/// Unflatten a single-level mapping into a nested one with default options.
///
/// Equivalent to [`unflatten_with`] with [`UnflattenOptions::default`].
///
/// # Example
///
/// ```
/// use collection_literals::btree;
/// use flatstruct_core::{unflatten, Value};
///
/// let flat = btree! {
///     "a".into() => Value::from(1),
///     "b/c".into() => Value::from(2),
/// };
///
/// let nested = unflatten(&flat)?;
/// assert_eq!(nested, btree! {
///     "a".into() => Value::from(1),
///     "b".into() => Value::Map(btree! {
///         "c".into() => Value::from(2),
///     }),
/// });
/// # Ok::<(), flatstruct_core::Error>(())
/// ```
pub fn unflatten(input: &Map) -> Result<Map, Error> {
    unflatten_with(input, &UnflattenOptions::default())
}

/// Unflatten a single-level mapping into a nested one.
///
/// Each key is split on the separator; every segment but the last selects
/// (or creates) a sub-mapping, and the last one holds the value. Keys
/// without the separator stay at the top level. Map-typed values are
/// carried as leaves and end up as sub-mappings wherever their key puts
/// them; deeper keys then merge into them like into any other sub-mapping.
///
/// Conflicts arise when one key's full path is a prefix of another's, or
/// equals it after stringification. With `reject_duplicate_keys` set the
/// conflict is [`Error::DuplicateKey`]; otherwise the resolution is:
///
/// - a value arriving where a sub-mapping lives is stored inside that
///   sub-mapping under the placeholder key;
/// - a value arriving where a leaf lives replaces the leaf with a mapping
///   holding the arrival under the placeholder;
/// - a deeper path running into a leaf rewraps the leaf as a mapping with
///   the leaf under the placeholder, then descends into it.
///
/// Descending into an existing sub-mapping is a plain merge, never a
/// conflict.
///
/// # Errors
///
/// [`Error::DuplicateKey`] on a conflict under the strict duplicate policy.
/// [`Error::InvalidKeyKind`] for a non-string key, or for a non-string
/// placeholder the resolution needs, under the strict key policy.
pub fn unflatten_with(input: &Map, options: &UnflattenOptions) -> Result<Map, Error> {
    let mut output = Map::new();
    for (key, value) in input {
        let path = key.to_segment(options.reject_non_string_keys)?;
        insert_path(&mut output, &path, &path, value.clone(), options)?;
    }
    Ok(output)
}

/// Insert `value` at `rest`, the not-yet-consumed tail of `full_key`,
/// consuming one path segment per call.
fn insert_path(
    target: &mut Map,
    full_key: &str,
    rest: &str,
    value: Value,
    options: &UnflattenOptions,
) -> Result<(), Error> {
    let Some((head, tail)) = split_head(rest, &options.separator) else {
        return insert_leaf(target, full_key, rest, value, options);
    };

    let head_key = Key::Str(head.to_string());
    let mut sub = match target.remove(&head_key) {
        None => Map::new(),
        Some(Value::Map(map)) => map,
        Some(leaf) => {
            if options.reject_duplicate_keys {
                return Err(Error::DuplicateKey {
                    key: full_key.to_string(),
                    segment: head.to_string(),
                });
            }
            let placeholder = options.placeholder()?;
            log::debug!(
                "Rewrapping the leaf at segment {:?} under {} to descend for {:?}",
                head,
                placeholder,
                full_key
            );
            let mut map = Map::new();
            map.insert(placeholder, leaf);
            map
        }
    };
    insert_path(&mut sub, full_key, tail, value, options)?;
    target.insert(head_key, Value::Map(sub));
    Ok(())
}

/// Place `value` under the final `segment` of `full_key`.
fn insert_leaf(
    target: &mut Map,
    full_key: &str,
    segment: &str,
    value: Value,
    options: &UnflattenOptions,
) -> Result<(), Error> {
    let key = Key::Str(segment.to_string());
    if let Some(existing) = target.get_mut(&key) {
        if options.reject_duplicate_keys {
            return Err(Error::DuplicateKey {
                key: full_key.to_string(),
                segment: segment.to_string(),
            });
        }
        let placeholder = options.placeholder()?;
        log::debug!(
            "Segment {:?} of {:?} is already occupied; storing the value under {}",
            segment,
            full_key,
            placeholder
        );
        match existing {
            Value::Map(map) => {
                map.insert(placeholder, value);
            }
            leaf => {
                let mut map = Map::new();
                map.insert(placeholder, value);
                *leaf = Value::Map(map);
            }
        }
        return Ok(());
    }
    target.insert(key, value);
    Ok(())
}

/// Split on the first separator occurrence. An empty separator never
/// matches, so every key is a leaf.
fn split_head<'a>(key: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    if sep.is_empty() {
        return None;
    }
    key.split_once(sep)
}
