//! Codec error types.

use thiserror::Error;

use crate::attribute::MAX_VALUE_LEN;

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while decoding, encoding or transforming attribute values.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Wire value has the wrong size for a fixed-width codec.
    #[error("invalid value length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Size the codec requires
        expected: usize,
        /// Size that was supplied
        actual: usize,
    },

    /// Encoded value does not fit in a single attribute.
    #[error("value of {len} bytes exceeds the {max}-byte attribute limit", max = MAX_VALUE_LEN)]
    TooLong {
        /// Encoded length
        len: usize,
    },

    /// Text attribute is not valid UTF-8.
    #[error("value is not valid UTF-8")]
    InvalidUtf8,

    /// Value kind is not accepted by this codec.
    #[error("expected {expected} value, got {actual}")]
    TypeMismatch {
        /// Kind the codec accepts
        expected: &'static str,
        /// Kind that was supplied
        actual: &'static str,
    },

    /// Value cannot be represented in the wire format (e.g. a time before
    /// 1970 or after 2106).
    #[error("value out of range for the wire representation")]
    OutOfRange,

    /// Codec-specific failure from a codec outside this crate.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl CodecError {
    /// Wrap an arbitrary error raised by a third-party codec.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}
