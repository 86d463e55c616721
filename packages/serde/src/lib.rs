//! Serde integration for flatstruct.
//!
//! Everything here composes the core transforms with serde's data model:
//! - `to_value`/`from_value`: Any serde type in and out of a `Value` tree
//! - `flatten_json`/`unflatten_json`: The transforms over JSON objects
//! - `json_to_value`/`value_to_json`: The underlying conversions
//!
//! # Example
//!
//! ```rust
//! use flatstruct_serde::{from_value, to_value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server = Server {
//!     host: "localhost".to_string(),
//!     port: 8080,
//! };
//!
//! let value = to_value(&server)?;
//! assert_eq!(from_value::<Server>(value)?, server);
//! # Ok::<(), flatstruct_serde::Error>(())
//! ```

mod convert;
mod error;
mod json;

pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use error::Error;
pub use json::{flatten_json, flatten_json_with, unflatten_json, unflatten_json_with, JsonMap};

// Re-export core types for convenience
pub use flatstruct_core::{
    flatten, flatten_with, unflatten, unflatten_with, FlattenOptions, Key, Map, UnflattenOptions,
    Value,
};
