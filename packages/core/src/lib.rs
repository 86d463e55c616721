//! Core flatstruct: flatten and unflatten for hierarchical mappings.
//!
//! A nested mapping flattens into a single level whose keys are the
//! separator-joined paths of its leaves; unflattening rebuilds the nesting.
//! - `Key`: Mapping key, string or otherwise
//! - `Value`: Tree-shaped value (the nesting lives in its `Map` variant)
//! - `flatten`/`flatten_with`: Nested to flat
//! - `unflatten`/`unflatten_with`: Flat to nested, with duplicate-key
//!   resolution policies
//!
//! # Example
//!
//! ```rust
//! use collection_literals::btree;
//! use flatstruct_core::{flatten, unflatten, Key, Value};
//!
//! let nested = btree! {
//!     "server".into() => Value::Map(btree! {
//!         "host".into() => Value::from("localhost"),
//!         "port".into() => Value::from(8080),
//!     }),
//! };
//!
//! let flat = flatten(&nested)?;
//! assert_eq!(flat.get(&Key::from("server/port")), Some(&Value::from(8080)));
//! assert_eq!(unflatten(&flat)?, nested);
//! # Ok::<(), flatstruct_core::Error>(())
//! ```

mod error;
mod flatten;
mod key;
mod unflatten;
mod value;

pub use error::Error;
pub use flatten::{flatten, flatten_with, FlattenOptions};
pub use key::Key;
pub use unflatten::{unflatten, unflatten_with, UnflattenOptions};
pub use value::{Map, Value};
