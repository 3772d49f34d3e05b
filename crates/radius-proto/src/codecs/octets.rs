use bytes::Bytes;

use super::mismatch;
use crate::{
    attribute::AttributeValue,
    codec::{AttributeCodec, AttributeTransformer, check_len},
    errors::Result,
};

/// Opaque byte strings (RFC 2865 `string`).
///
/// Text handed to the transformer is accepted and stored as its UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctetsCodec;

impl AttributeCodec for OctetsCodec {
    fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
        Ok(AttributeValue::Octets(Bytes::copy_from_slice(wire)))
    }

    fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
        match value {
            AttributeValue::Octets(bytes) => check_len(bytes.clone()),
            other => Err(mismatch("octets", other)),
        }
    }
}

impl AttributeTransformer for OctetsCodec {
    fn transform(&self, value: AttributeValue) -> Result<AttributeValue> {
        match value {
            AttributeValue::Octets(bytes) => check_len(bytes).map(AttributeValue::Octets),
            AttributeValue::Text(text) => {
                check_len(Bytes::from(text.into_bytes())).map(AttributeValue::Octets)
            },
            other => Err(mismatch("octets", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodecError;

    #[test]
    fn decode_copies_wire_bytes() {
        let value = OctetsCodec.decode(b"state-blob").unwrap();
        assert_eq!(value, AttributeValue::Octets(Bytes::from_static(b"state-blob")));
    }

    #[test]
    fn transform_converts_text() {
        let value = OctetsCodec.transform("secret".into()).unwrap();
        assert_eq!(value, AttributeValue::Octets(Bytes::from_static(b"secret")));
    }

    #[test]
    fn transform_enforces_attribute_limit() {
        let err = OctetsCodec.transform(AttributeValue::Octets(Bytes::from(vec![0; 254])));
        assert!(matches!(err, Err(CodecError::TooLong { len: 254 })));

        let err = OctetsCodec.transform(AttributeValue::Text("x".repeat(1000)));
        assert!(matches!(err, Err(CodecError::TooLong { len: 1000 })));

        assert!(OctetsCodec.transform(AttributeValue::Octets(Bytes::from(vec![0; 253]))).is_ok());
    }

    #[test]
    fn encode_rejects_integers() {
        let err = OctetsCodec.encode(&AttributeValue::Integer(1)).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { expected: "octets", actual: "integer" }));
    }
}
