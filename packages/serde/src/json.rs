//! Flatten and unflatten for JSON documents.
//!
//! The JSON configuration use case: a nested document becomes a single
//! level of `"a/b/c"` keys and back. JSON object keys are always strings,
//! so the strict key policy never fires on the way in; flat keys come out
//! as plain strings.

use serde_json::value::Value as JsonValue;

use flatstruct_core::{flatten_with, unflatten_with, FlattenOptions, Key, Map, UnflattenOptions};

use crate::convert::{json_to_value, value_to_json};
use crate::Error;

/// JSON object type on both sides of the JSON transforms.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Flatten a JSON object into a single level with default options.
///
/// Equivalent to [`flatten_json_with`] with [`FlattenOptions::default`].
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use flatstruct_serde::flatten_json;
///
/// let config = json!({"server": {"port": 8080}});
/// let flat = flatten_json(config.as_object().unwrap())?;
/// assert_eq!(flat.get("server/port"), Some(&json!(8080)));
/// # Ok::<(), flatstruct_serde::Error>(())
/// ```
pub fn flatten_json(object: &JsonMap) -> Result<JsonMap, Error> {
    flatten_json_with(object, &FlattenOptions::default())
}

/// Flatten a JSON object into a single level.
pub fn flatten_json_with(object: &JsonMap, options: &FlattenOptions) -> Result<JsonMap, Error> {
    let tree = json_object_to_map(object);
    let flat = flatten_with(&tree, options)?;
    Ok(map_to_json_object(flat))
}

/// Unflatten a JSON object into a nested one with default options.
///
/// Equivalent to [`unflatten_json_with`] with [`UnflattenOptions::default`].
pub fn unflatten_json(object: &JsonMap) -> Result<JsonMap, Error> {
    unflatten_json_with(object, &UnflattenOptions::default())
}

/// Unflatten a JSON object into a nested one.
///
/// The duplicate-key policy applies exactly as in the core transform; a
/// placeholder used for merging should be a string key, since anything
/// else could not have come from JSON anyway.
pub fn unflatten_json_with(object: &JsonMap, options: &UnflattenOptions) -> Result<JsonMap, Error> {
    let flat = json_object_to_map(object);
    let tree = unflatten_with(&flat, options)?;
    Ok(map_to_json_object(tree))
}

fn json_object_to_map(object: &JsonMap) -> Map {
    object
        .iter()
        .map(|(k, v)| (Key::Str(k.clone()), json_to_value(v.clone())))
        .collect()
}

fn map_to_json_object(map: Map) -> JsonMap {
    map.into_iter()
        .map(|(k, v)| (k.to_string(), value_to_json(v)))
        .collect()
}
