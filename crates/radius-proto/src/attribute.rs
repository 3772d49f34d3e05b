//! Attribute types and values.

use std::{fmt, net::Ipv4Addr, time::SystemTime};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Largest value an attribute can carry.
///
/// The attribute length byte covers the 2-byte type/length header, so a
/// 255-byte attribute leaves 253 bytes for the value.
pub const MAX_VALUE_LEN: usize = 253;

/// Wire-level attribute type identifier.
///
/// The full `u8` range is addressable, so a dictionary can index a fixed
/// 256-slot table by [`AttributeType::index`] without bounds checks failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeType(u8);

impl AttributeType {
    /// Number of distinct attribute types.
    pub const COUNT: usize = 256;

    /// Create an attribute type from its wire byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Wire byte for this type.
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Slot index in a [`Self::COUNT`]-sized table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for AttributeType {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<AttributeType> for u8 {
    fn from(value: AttributeType) -> Self {
        value.0
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application-facing attribute value.
///
/// Each built-in codec decodes to, and encodes from, one of these variants.
/// Raw values handed to the attribute factory may use a different variant
/// when the codec's transformer knows how to convert it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Opaque bytes
    Octets(Bytes),
    /// UTF-8 text
    Text(String),
    /// 32-bit unsigned integer
    Integer(u32),
    /// IPv4 address
    Address(Ipv4Addr),
    /// Timestamp with one-second resolution on the wire
    Time(SystemTime),
}

impl AttributeValue {
    /// Short name of the variant, used in type-mismatch errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Octets(_) => "octets",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Address(_) => "address",
            Self::Time(_) => "time",
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(value)
    }
}

impl From<Ipv4Addr> for AttributeValue {
    fn from(value: Ipv4Addr) -> Self {
        Self::Address(value)
    }
}

impl From<Bytes> for AttributeValue {
    fn from(value: Bytes) -> Self {
        Self::Octets(value)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Octets(Bytes::from(value))
    }
}

impl From<SystemTime> for AttributeValue {
    fn from(value: SystemTime) -> Self {
        Self::Time(value)
    }
}

/// Resolved attribute, ready for the packet encoder.
///
/// Built fresh for each call to the dictionary's attribute factory and owned
/// by the caller. The dictionary never retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Wire type the name resolved to
    pub attribute_type: AttributeType,

    /// Value after the codec's transformer ran (if it has one)
    pub value: AttributeValue,
}

impl Attribute {
    /// Create an attribute from its parts.
    pub fn new(attribute_type: AttributeType, value: AttributeValue) -> Self {
        Self { attribute_type, value }
    }
}
