use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::Bytes;

use super::{fixed4, mismatch};
use crate::{
    attribute::AttributeValue,
    codec::{AttributeCodec, AttributeTransformer},
    errors::{CodecError, Result},
};

/// Timestamps as 32-bit seconds since the Unix epoch (RFC 2865 `time`).
///
/// Sub-second precision is truncated on encode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeCodec;

impl AttributeCodec for TimeCodec {
    fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
        let secs = u32::from_be_bytes(fixed4(wire)?);
        Ok(AttributeValue::Time(UNIX_EPOCH + Duration::from_secs(u64::from(secs))))
    }

    fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
        match value {
            AttributeValue::Time(time) => {
                Ok(Bytes::copy_from_slice(&epoch_secs(*time)?.to_be_bytes()))
            },
            other => Err(mismatch("time", other)),
        }
    }
}

impl AttributeTransformer for TimeCodec {
    fn transform(&self, value: AttributeValue) -> Result<AttributeValue> {
        match value {
            AttributeValue::Time(time) => {
                epoch_secs(time)?;
                Ok(value)
            },
            AttributeValue::Integer(secs) => {
                Ok(AttributeValue::Time(UNIX_EPOCH + Duration::from_secs(u64::from(secs))))
            },
            other => Err(mismatch("time", &other)),
        }
    }
}

fn epoch_secs(time: SystemTime) -> Result<u32> {
    let elapsed = time.duration_since(UNIX_EPOCH).map_err(|_| CodecError::OutOfRange)?;
    u32::try_from(elapsed.as_secs()).map_err(|_| CodecError::OutOfRange)
}
