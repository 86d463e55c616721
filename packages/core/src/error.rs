//! Error types for the transforms.

use crate::Key;

/// Errors from the flatten and unflatten transforms.
///
/// Both transforms fail fast: the first offending key aborts the whole
/// operation and no partial output is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A key is not a string while the strict key policy is in effect.
    #[error("invalid key kind {kind}: {key} (string keys required)", kind = .key.kind())]
    InvalidKeyKind {
        /// The offending key (or configured placeholder).
        key: Key,
    },

    /// Two flat keys claim the same path while the strict duplicate policy
    /// is in effect.
    #[error("duplicate key {key}: path already occupied at segment {segment}")]
    DuplicateKey {
        /// The flat key whose insertion collided.
        key: String,
        /// The path segment where the collision happened.
        segment: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_kind_display() {
        let e = Error::InvalidKeyKind {
            key: Key::Int(1010101),
        };
        let display = format!("{}", e);
        assert!(display.contains("invalid key kind"));
        assert!(display.contains("int"));
        assert!(display.contains("1010101"));
    }

    #[test]
    fn duplicate_key_display() {
        let e = Error::DuplicateKey {
            key: "a/b".to_string(),
            segment: "a".to_string(),
        };
        let display = format!("{}", e);
        assert!(display.contains("duplicate key"));
        assert!(display.contains("a/b"));
        assert!(display.contains("segment a"));
    }
}
