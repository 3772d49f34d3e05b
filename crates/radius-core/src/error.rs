//! Dictionary error types.

use std::fmt;

use radius_proto::{AttributeType, CodecError};
use thiserror::Error;

/// Result alias for dictionary operations.
pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Key used to address a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKey {
    /// Addressed by wire type
    Type(AttributeType),
    /// Addressed by symbolic name
    Name(String),
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(attribute_type) => write!(f, "type {attribute_type}"),
            Self::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

/// Errors returned by [`crate::Dictionary`] operations.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The type slot is already occupied.
    #[error("attribute type {0} is already registered")]
    AlreadyRegistered(AttributeType),

    /// The name is bound to another type and the dictionary rejects name
    /// collisions.
    #[error("attribute name {0:?} is already registered")]
    NameAlreadyRegistered(String),

    /// Removal targeted a key with no entry.
    #[error("attribute {0} is not registered")]
    NotRegistered(AttributeKey),

    /// The attribute factory was given an unknown name.
    #[error("attribute name {0:?} is not registered")]
    NameNotRegistered(String),

    /// The codec's transformer rejected the raw value.
    #[error(transparent)]
    Transform(#[from] CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        insta::assert_snapshot!(
            DictionaryError::AlreadyRegistered(AttributeType::new(1)),
            @"attribute type 1 is already registered"
        );
        insta::assert_snapshot!(
            DictionaryError::NotRegistered(AttributeKey::Name("Login-Service".into())),
            @r#"attribute name "Login-Service" is not registered"#
        );
        insta::assert_snapshot!(
            DictionaryError::NotRegistered(AttributeKey::Type(AttributeType::new(200))),
            @"attribute type 200 is not registered"
        );
    }

    #[test]
    fn transform_error_is_verbatim() {
        let err = DictionaryError::from(CodecError::InvalidUtf8);
        assert_eq!(err.to_string(), CodecError::InvalidUtf8.to_string());
    }
}
