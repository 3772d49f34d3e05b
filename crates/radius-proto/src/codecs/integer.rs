use bytes::Bytes;

use super::{fixed4, mismatch};
use crate::{
    attribute::AttributeValue,
    codec::{AttributeCodec, AttributeTransformer},
    errors::Result,
};

/// 32-bit unsigned integers in network byte order (RFC 2865 `integer`).
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerCodec;

impl AttributeCodec for IntegerCodec {
    fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
        Ok(AttributeValue::Integer(u32::from_be_bytes(fixed4(wire)?)))
    }

    fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
        match value {
            AttributeValue::Integer(n) => Ok(Bytes::copy_from_slice(&n.to_be_bytes())),
            other => Err(mismatch("integer", other)),
        }
    }
}

impl AttributeTransformer for IntegerCodec {
    fn transform(&self, value: AttributeValue) -> Result<AttributeValue> {
        match value {
            AttributeValue::Integer(_) => Ok(value),
            other => Err(mismatch("integer", &other)),
        }
    }
}
