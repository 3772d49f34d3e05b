use std::net::Ipv4Addr;

use bytes::Bytes;

use super::{fixed4, mismatch};
use crate::{
    attribute::AttributeValue,
    codec::{AttributeCodec, AttributeTransformer},
    errors::Result,
};

/// IPv4 addresses (RFC 2865 `address`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressCodec;

impl AttributeCodec for AddressCodec {
    fn decode(&self, wire: &[u8]) -> Result<AttributeValue> {
        Ok(AttributeValue::Address(Ipv4Addr::from(fixed4(wire)?)))
    }

    fn encode(&self, value: &AttributeValue) -> Result<Bytes> {
        match value {
            AttributeValue::Address(addr) => Ok(Bytes::copy_from_slice(&addr.octets())),
            other => Err(mismatch("address", other)),
        }
    }
}

impl AttributeTransformer for AddressCodec {
    fn transform(&self, value: AttributeValue) -> Result<AttributeValue> {
        match value {
            AttributeValue::Address(_) => Ok(value),
            AttributeValue::Octets(bytes) => {
                Ok(AttributeValue::Address(Ipv4Addr::from(fixed4(&bytes)?)))
            },
            other => Err(mismatch("address", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;
    use crate::errors::CodecError;

    #[test]
    fn decode_address() {
        let value = AddressCodec.decode(&hex!("c0a80001")).unwrap();
        assert_eq!(value, AttributeValue::Address(Ipv4Addr::new(192, 168, 0, 1)));
    }

    #[test]
    fn encode_address() {
        let bytes = AddressCodec.encode(&Ipv4Addr::new(10, 0, 0, 254).into()).unwrap();
        assert_eq!(&bytes[..], hex!("0a0000fe"));
    }

    #[test]
    fn transform_accepts_four_octets() {
        let raw = AttributeValue::Octets(Bytes::copy_from_slice(&hex!("7f000001")));
        let value = AddressCodec.transform(raw).unwrap();
        assert_eq!(value, AttributeValue::Address(Ipv4Addr::LOCALHOST));

        let short = AttributeValue::Octets(Bytes::copy_from_slice(&hex!("7f00")));
        let err = AddressCodec.transform(short).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { expected: 4, actual: 2 }));
    }
}
