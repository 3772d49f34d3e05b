use bytes::Bytes;

use super::mismatch;
use crate::{
    attribute::{AttributeValue, MAX_VALUE_LEN},
    codec::{AttributeCodec, AttributeTransformer, check_len},
    errors::{CodecError, Result},
};

/// UTF-8 text (RFC 2865 `text`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl AttributeCodec for TextCodec {
    fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
        let text = std::str::from_utf8(wire).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(AttributeValue::Text(text.to_owned()))
    }

    fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
        match value {
            AttributeValue::Text(text) => check_len(Bytes::copy_from_slice(text.as_bytes())),
            other => Err(mismatch("text", other)),
        }
    }
}

impl AttributeTransformer for TextCodec {
    fn transform(&self, value: AttributeValue) -> Result<AttributeValue> {
        match value {
            AttributeValue::Text(text) => fit(text),
            AttributeValue::Octets(bytes) => {
                let text = String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)?;
                fit(text)
            },
            other => Err(mismatch("text", &other)),
        }
    }
}

fn fit(text: String) -> Result<AttributeValue> {
    if text.len() > MAX_VALUE_LEN {
        return Err(CodecError::TooLong { len: text.len() });
    }
    Ok(AttributeValue::Text(text))
}
