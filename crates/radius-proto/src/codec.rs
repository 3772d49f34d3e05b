//! Codec capabilities.
//!
//! A dictionary stores one [`Codec`] per attribute type. The handle is a
//! tagged variant rather than a bare trait object so that two questions are
//! answered without runtime type inspection:
//!
//! - Is this type known at all? [`Codec::Unknown`] stands in for unregistered
//!   types and behaves as a byte pass-through, so decoders never branch on
//!   presence.
//! - Does the codec normalize raw values? [`Codec::Transforming`] carries a
//!   transformer next to the codec; [`Codec::Plain`] does not.

use std::{fmt, sync::Arc};

use bytes::Bytes;

use crate::{
    attribute::{AttributeValue, MAX_VALUE_LEN},
    errors::{CodecError, Result},
};

/// Converts an attribute value between its wire bytes and an
/// [`AttributeValue`].
pub trait AttributeCodec: Send + Sync + fmt::Debug {
    /// Decode the value bytes of a single attribute.
    fn decode(&self, wire: &[u8]) -> Result<AttributeValue>;

    /// Encode a value into attribute value bytes.
    ///
    /// Implementations must reject values longer than [`MAX_VALUE_LEN`].
    fn encode(&self, value: &AttributeValue) -> Result<Bytes>;
}

/// Normalizes or validates a raw application value before it is packaged
/// into an attribute.
pub trait AttributeTransformer: Send + Sync + fmt::Debug {
    /// Convert `value` into the form the paired codec encodes.
    fn transform(&self, value: AttributeValue) -> Result<AttributeValue>;
}

/// Shared handle to the codec for one attribute type.
///
/// Cloning is cheap. Equality is identity: handles are equal when both are
/// the unknown sentinel or when they point at the same codec (and
/// transformer) allocations.
#[derive(Debug, Clone, Default)]
pub enum Codec {
    /// Sentinel for unregistered types. Decodes to raw octets and encodes
    /// octets (or text) verbatim.
    #[default]
    Unknown,

    /// Codec without a transformer. Raw values are packaged as-is.
    Plain(Arc<dyn AttributeCodec>),

    /// Codec paired with a transformer that runs before packaging.
    Transforming {
        /// Wire codec
        codec: Arc<dyn AttributeCodec>,
        /// Value normalizer
        transformer: Arc<dyn AttributeTransformer>,
    },
}

impl Codec {
    /// Wrap a codec that has no transformer.
    pub fn plain(codec: impl AttributeCodec + 'static) -> Self {
        Self::Plain(Arc::new(codec))
    }

    /// Pair a codec with a separate transformer.
    pub fn with_transformer(
        codec: impl AttributeCodec + 'static,
        transformer: impl AttributeTransformer + 'static,
    ) -> Self {
        Self::Transforming { codec: Arc::new(codec), transformer: Arc::new(transformer) }
    }

    /// Wrap a type that is both codec and transformer.
    pub fn transforming<T>(codec: T) -> Self
    where
        T: AttributeCodec + AttributeTransformer + 'static,
    {
        let shared = Arc::new(codec);
        Self::Transforming { codec: shared.clone(), transformer: shared }
    }

    /// True for the unregistered-type sentinel.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Transformer attached to this codec, if any.
    pub fn transformer(&self) -> Option<&dyn AttributeTransformer> {
        match self {
            Self::Transforming { transformer, .. } => Some(transformer.as_ref()),
            Self::Unknown | Self::Plain(_) => None,
        }
    }

    /// Decode the value bytes of a single attribute.
    pub fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
        match self {
            Self::Unknown => Ok(AttributeValue::Octets(Bytes::copy_from_slice(wire))),
            Self::Plain(codec) | Self::Transforming { codec, .. } => codec.decode(wire),
        }
    }

    /// Encode a value into attribute value bytes.
    pub fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
        match self {
            Self::Unknown => passthrough(value),
            Self::Plain(codec) | Self::Transforming { codec, .. } => codec.encode(value),
        }
    }
}

impl PartialEq for Codec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unknown, Self::Unknown) => true,
            (Self::Plain(a), Self::Plain(b)) => Arc::ptr_eq(a, b),
            (
                Self::Transforming { codec: a, transformer: ta },
                Self::Transforming { codec: b, transformer: tb },
            ) => Arc::ptr_eq(a, b) && Arc::ptr_eq(ta, tb),
            _ => false,
        }
    }
}

impl Eq for Codec {}

fn passthrough(value: &AttributeValue) -> Result<Bytes> {
    let bytes = match value {
        AttributeValue::Octets(bytes) => bytes.clone(),
        AttributeValue::Text(text) => Bytes::copy_from_slice(text.as_bytes()),
        other => {
            return Err(CodecError::TypeMismatch { expected: "octets", actual: other.kind() });
        },
    };
    check_len(bytes)
}

/// Reject encoded values that do not fit in one attribute.
pub(crate) fn check_len(bytes: Bytes) -> Result<Bytes> {
    if bytes.len() > MAX_VALUE_LEN {
        return Err(CodecError::TooLong { len: bytes.len() });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Upper;

    impl AttributeCodec for Upper {
        fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
            Ok(AttributeValue::Octets(Bytes::copy_from_slice(wire)))
        }

        fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
            passthrough(value)
        }
    }

    impl AttributeTransformer for Upper {
        fn transform(&self, value: AttributeValue) -> Result<AttributeValue> {
            match value {
                AttributeValue::Text(text) => Ok(AttributeValue::Text(text.to_uppercase())),
                other => Err(CodecError::TypeMismatch { expected: "text", actual: other.kind() }),
            }
        }
    }

    #[test]
    fn unknown_decodes_raw_octets() {
        let value = Codec::Unknown.decode(&[0xde, 0xad]).unwrap();
        assert_eq!(value, AttributeValue::Octets(Bytes::from_static(&[0xde, 0xad])));
    }

    #[test]
    fn unknown_encodes_octets_and_text_verbatim() {
        let codec = Codec::default();
        assert!(codec.is_unknown());
        assert!(codec.transformer().is_none());

        let octets = AttributeValue::Octets(Bytes::from_static(b"\x01\x02"));
        assert_eq!(codec.encode(&octets).unwrap(), Bytes::from_static(b"\x01\x02"));
        assert_eq!(codec.encode(&"abc".into()).unwrap(), Bytes::from_static(b"abc"));
    }

    #[test]
    fn unknown_rejects_typed_values_without_panicking() {
        let err = Codec::Unknown.encode(&AttributeValue::Integer(7)).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { expected: "octets", actual: "integer" }));
    }

    #[test]
    fn unknown_rejects_oversized_values() {
        let value = AttributeValue::Octets(Bytes::from(vec![0u8; MAX_VALUE_LEN + 1]));
        let err = Codec::Unknown.encode(&value).unwrap_err();
        assert!(matches!(err, CodecError::TooLong { len } if len == MAX_VALUE_LEN + 1));
    }

    #[test]
    fn transforming_exposes_transformer() {
        let codec = Codec::transforming(Upper);
        let transformer = codec.transformer().unwrap();
        assert_eq!(
            transformer.transform("nas".into()).unwrap(),
            AttributeValue::Text("NAS".into())
        );

        assert!(Codec::plain(Upper).transformer().is_none());
    }

    #[test]
    fn equality_is_identity() {
        let a = Codec::plain(Upper);
        let b = Codec::plain(Upper);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(Codec::Unknown, Codec::Unknown);
        assert_ne!(a, Codec::Unknown);

        let t = Codec::transforming(Upper);
        assert_eq!(t, t.clone());
        assert_ne!(t, Codec::transforming(Upper));
    }
}
