//! Built-in value codecs.
//!
//! These cover the value kinds RFC 2865 defines: opaque strings, text,
//! 32-bit integers, IPv4 addresses and timestamps. Every built-in codec is
//! also a transformer, so raw application values are checked (and converted
//! where a lossless conversion exists) before they are packaged.
//!
//! The [`Codec`] constructors return shared handles: calling
//! [`Codec::text`] twice yields two equal handles to one codec.

mod address;
mod integer;
mod octets;
mod text;
mod time;

use std::sync::LazyLock;

pub use address::AddressCodec;
pub use integer::IntegerCodec;
pub use octets::OctetsCodec;
pub use text::TextCodec;
pub use time::TimeCodec;

use crate::{
    attribute::AttributeValue,
    codec::Codec,
    errors::{CodecError, Result},
};

static OCTETS: LazyLock<Codec> = LazyLock::new(|| Codec::transforming(OctetsCodec));
static TEXT: LazyLock<Codec> = LazyLock::new(|| Codec::transforming(TextCodec));
static INTEGER: LazyLock<Codec> = LazyLock::new(|| Codec::transforming(IntegerCodec));
static ADDRESS: LazyLock<Codec> = LazyLock::new(|| Codec::transforming(AddressCodec));
static TIME: LazyLock<Codec> = LazyLock::new(|| Codec::transforming(TimeCodec));

impl Codec {
    /// Shared handle to [`OctetsCodec`].
    pub fn octets() -> Self {
        OCTETS.clone()
    }

    /// Shared handle to [`TextCodec`].
    pub fn text() -> Self {
        TEXT.clone()
    }

    /// Shared handle to [`IntegerCodec`].
    pub fn integer() -> Self {
        INTEGER.clone()
    }

    /// Shared handle to [`AddressCodec`].
    pub fn address() -> Self {
        ADDRESS.clone()
    }

    /// Shared handle to [`TimeCodec`].
    pub fn time() -> Self {
        TIME.clone()
    }
}

/// Read a fixed 4-byte value.
fn fixed4(wire: &[u8]) -> Result<[u8; 4]> {
    <[u8; 4]>::try_from(wire)
        .map_err(|_| CodecError::InvalidLength { expected: 4, actual: wire.len() })
}

fn mismatch(expected: &'static str, actual: &AttributeValue) -> CodecError {
    CodecError::TypeMismatch { expected, actual: actual.kind() }
}
