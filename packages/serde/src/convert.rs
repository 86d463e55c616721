//! Typed conversions: any serde type in and out of a [`Value`] tree.
//!
//! The bridge goes through `serde_json::Value`, which keeps both directions
//! small and gives typed callers the same semantics as the JSON-facing
//! functions. Map keys cross in their canonical string form, so a
//! non-string key is indistinguishable from a string key with the same
//! text once converted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use flatstruct_core::{Key, Value};

use crate::Error;

/// Deserialize a typed value out of a [`Value`] tree.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    Ok(serde_json::from_value(value_to_json(value))?)
}

/// Serialize any serde type into a [`Value`] tree.
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, Error> {
    Ok(json_to_value(serde_json::to_value(data)?))
}

/// Convert a [`Value`] tree to `serde_json::Value`.
///
/// JSON object keys are strings, so map keys take their canonical string
/// form. Bytes become base64 text; a non-finite float has no JSON number
/// and becomes null.
pub fn value_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s),
        Value::Bytes(b) => serde_json::Value::String(STANDARD.encode(&b)),
        Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(value_to_json).collect()),
        Value::Map(map) => serde_json::Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_string(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert `serde_json::Value` to a [`Value`] tree. Object keys come back
/// as string keys.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        // Numbers outside both i64 and f64 keep their text form
        serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Integer(i),
            (None, Some(f)) => Value::Float(f),
            (None, None) => Value::String(n.to_string()),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(k, v)| (Key::Str(k), json_to_value(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Endpoint {
        host: String,
        port: u16,
        secure: bool,
    }

    #[test]
    fn typed_round_trip() {
        let original = Endpoint {
            host: "example.net".to_string(),
            port: 8443,
            secure: true,
        };

        let value = to_value(&original).unwrap();
        let recovered: Endpoint = from_value(value).unwrap();
        assert_eq!(original, recovered);
    }

    #[test]
    fn nested_types_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Pool {
            primary: Endpoint,
            fallbacks: Vec<String>,
        }

        let original = Pool {
            primary: Endpoint {
                host: "a.example.net".to_string(),
                port: 80,
                secure: false,
            },
            fallbacks: vec!["b.example.net".to_string(), "c.example.net".to_string()],
        };

        let value = to_value(&original).unwrap();
        let recovered: Pool = from_value(value).unwrap();
        assert_eq!(original, recovered);
    }

    #[test]
    fn to_value_gives_string_keyed_maps() {
        let value = to_value(&Endpoint {
            host: "example.net".to_string(),
            port: 80,
            secure: false,
        })
        .unwrap();

        assert_eq!(value, Value::Map(btree! {
            "host".into() => Value::String("example.net".to_string()),
            "port".into() => Value::Integer(80),
            "secure".into() => Value::Bool(false),
        }));
    }

    #[test]
    fn numbers_narrow_to_integer_or_float() {
        let json = serde_json::json!({ "count": 7, "offset": -3, "ratio": 0.5 });

        let value = json_to_value(json);
        match value {
            Value::Map(map) => {
                assert_eq!(map.get(&Key::from("count")), Some(&Value::Integer(7)));
                assert_eq!(map.get(&Key::from("offset")), Some(&Value::Integer(-3)));
                assert_eq!(map.get(&Key::from("ratio")), Some(&Value::Float(0.5)));
            }
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn non_string_keys_become_canonical_json_keys() {
        let value = Value::Map(btree! {
            Key::Null => Value::Integer(1),
            Key::Bool(true) => Value::Integer(2),
            Key::Int(7) => Value::Integer(3),
        });

        let json = value_to_json(value);
        assert_eq!(json, serde_json::json!({ "null": 1, "true": 2, "7": 3 }));
    }

    #[test]
    fn json_object_keys_come_back_as_string_keys() {
        let json = serde_json::json!({ "region": "east", "zones": 3 });

        let value = json_to_value(json);
        match value {
            Value::Map(map) => {
                assert_eq!(
                    map.get(&Key::from("region")),
                    Some(&Value::String("east".to_string()))
                );
                assert_eq!(map.get(&Key::from("zones")), Some(&Value::Integer(3)));
            }
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(value_to_json(Value::Float(f64::NAN)), serde_json::Value::Null);
        assert_eq!(
            value_to_json(Value::Float(f64::INFINITY)),
            serde_json::Value::Null
        );
    }

    #[test]
    fn bytes_cross_as_base64_text() {
        let json = value_to_json(Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]));
        match json {
            serde_json::Value::String(s) => {
                assert_eq!(STANDARD.decode(&s).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
            }
            other => panic!("expected base64 text, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_shape_fails_to_deserialize() {
        let value = Value::String("not an endpoint".to_string());
        let result: Result<Endpoint, _> = from_value(value);
        assert!(result.is_err());
    }
}
