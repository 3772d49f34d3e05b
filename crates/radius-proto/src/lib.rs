//! Attribute-level vocabulary for the RADIUS protocol.
//!
//! A RADIUS packet carries a list of attributes, each a one-byte type, a
//! one-byte length and up to 253 bytes of value. This crate owns the pieces
//! that sit between application values and those value bytes:
//!
//! - [`AttributeType`]: the one-byte wire identifier
//! - [`AttributeValue`]: the closed set of application-facing values
//! - [`Attribute`]: a resolved (type, value) pair ready for packet encoding
//! - [`Codec`]: a handle to a value codec, optionally paired with a
//!   transformer that normalizes raw values before they are packaged
//!
//! Packet framing, authenticators and transport live in higher layers. The
//! name-to-type mapping lives in `radius-core`.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attribute;
pub mod codec;
pub mod codecs;
pub mod errors;

pub use attribute::{Attribute, AttributeType, AttributeValue, MAX_VALUE_LEN};
pub use codec::{AttributeCodec, AttributeTransformer, Codec};
pub use errors::{CodecError, Result};
