//! RFC 2866 accounting attributes.

use radius_proto::{AttributeType, Codec};

use crate::dictionary::Dictionary;

/// `Acct-Status-Type`
pub const ACCT_STATUS_TYPE: AttributeType = AttributeType::new(40);
/// `Acct-Delay-Time`
pub const ACCT_DELAY_TIME: AttributeType = AttributeType::new(41);
/// `Acct-Input-Octets`
pub const ACCT_INPUT_OCTETS: AttributeType = AttributeType::new(42);
/// `Acct-Output-Octets`
pub const ACCT_OUTPUT_OCTETS: AttributeType = AttributeType::new(43);
/// `Acct-Session-Id`
pub const ACCT_SESSION_ID: AttributeType = AttributeType::new(44);
/// `Acct-Authentic`
pub const ACCT_AUTHENTIC: AttributeType = AttributeType::new(45);
/// `Acct-Session-Time`
pub const ACCT_SESSION_TIME: AttributeType = AttributeType::new(46);
/// `Acct-Input-Packets`
pub const ACCT_INPUT_PACKETS: AttributeType = AttributeType::new(47);
/// `Acct-Output-Packets`
pub const ACCT_OUTPUT_PACKETS: AttributeType = AttributeType::new(48);
/// `Acct-Terminate-Cause`
pub const ACCT_TERMINATE_CAUSE: AttributeType = AttributeType::new(49);
/// `Acct-Multi-Session-Id`
pub const ACCT_MULTI_SESSION_ID: AttributeType = AttributeType::new(50);
/// `Acct-Link-Count`
pub const ACCT_LINK_COUNT: AttributeType = AttributeType::new(51);

const ATTRIBUTES: &[(&str, AttributeType, fn() -> Codec)] = &[
    ("Acct-Status-Type", ACCT_STATUS_TYPE, Codec::integer),
    ("Acct-Delay-Time", ACCT_DELAY_TIME, Codec::integer),
    ("Acct-Input-Octets", ACCT_INPUT_OCTETS, Codec::integer),
    ("Acct-Output-Octets", ACCT_OUTPUT_OCTETS, Codec::integer),
    ("Acct-Session-Id", ACCT_SESSION_ID, Codec::text),
    ("Acct-Authentic", ACCT_AUTHENTIC, Codec::integer),
    ("Acct-Session-Time", ACCT_SESSION_TIME, Codec::integer),
    ("Acct-Input-Packets", ACCT_INPUT_PACKETS, Codec::integer),
    ("Acct-Output-Packets", ACCT_OUTPUT_PACKETS, Codec::integer),
    ("Acct-Terminate-Cause", ACCT_TERMINATE_CAUSE, Codec::integer),
    ("Acct-Multi-Session-Id", ACCT_MULTI_SESSION_ID, Codec::text),
    ("Acct-Link-Count", ACCT_LINK_COUNT, Codec::integer),
];

/// Register every RFC 2866 attribute into `dictionary`.
///
/// # Panics
///
/// Panics if any of the types or names is already registered.
pub fn register(dictionary: &Dictionary) {
    for &(name, attribute_type, codec) in ATTRIBUTES {
        dictionary.must_register(name, attribute_type, codec());
    }
}
