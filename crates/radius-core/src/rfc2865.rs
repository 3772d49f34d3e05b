//! RFC 2865 authentication attributes.
//!
//! Value kinds follow the RFC: `string` attributes use [`Codec::octets`],
//! `text` attributes use [`Codec::text`]. Attributes whose RFC type is
//! `string` but that usually carry printable data (e.g. `Called-Station-Id`)
//! stay octets, since peers are not required to send UTF-8.

use radius_proto::{AttributeType, Codec};

use crate::dictionary::Dictionary;

/// `User-Name`
pub const USER_NAME: AttributeType = AttributeType::new(1);
/// `User-Password`
pub const USER_PASSWORD: AttributeType = AttributeType::new(2);
/// `CHAP-Password`
pub const CHAP_PASSWORD: AttributeType = AttributeType::new(3);
/// `NAS-IP-Address`
pub const NAS_IP_ADDRESS: AttributeType = AttributeType::new(4);
/// `NAS-Port`
pub const NAS_PORT: AttributeType = AttributeType::new(5);
/// `Service-Type`
pub const SERVICE_TYPE: AttributeType = AttributeType::new(6);
/// `Framed-Protocol`
pub const FRAMED_PROTOCOL: AttributeType = AttributeType::new(7);
/// `Framed-IP-Address`
pub const FRAMED_IP_ADDRESS: AttributeType = AttributeType::new(8);
/// `Framed-IP-Netmask`
pub const FRAMED_IP_NETMASK: AttributeType = AttributeType::new(9);
/// `Framed-Routing`
pub const FRAMED_ROUTING: AttributeType = AttributeType::new(10);
/// `Filter-Id`
pub const FILTER_ID: AttributeType = AttributeType::new(11);
/// `Framed-MTU`
pub const FRAMED_MTU: AttributeType = AttributeType::new(12);
/// `Framed-Compression`
pub const FRAMED_COMPRESSION: AttributeType = AttributeType::new(13);
/// `Login-IP-Host`
pub const LOGIN_IP_HOST: AttributeType = AttributeType::new(14);
/// `Login-Service`
pub const LOGIN_SERVICE: AttributeType = AttributeType::new(15);
/// `Login-TCP-Port`
pub const LOGIN_TCP_PORT: AttributeType = AttributeType::new(16);
/// `Reply-Message`
pub const REPLY_MESSAGE: AttributeType = AttributeType::new(18);
/// `Callback-Number`
pub const CALLBACK_NUMBER: AttributeType = AttributeType::new(19);
/// `Callback-Id`
pub const CALLBACK_ID: AttributeType = AttributeType::new(20);
/// `Framed-Route`
pub const FRAMED_ROUTE: AttributeType = AttributeType::new(22);
/// `Framed-IPX-Network`
pub const FRAMED_IPX_NETWORK: AttributeType = AttributeType::new(23);
/// `State`
pub const STATE: AttributeType = AttributeType::new(24);
/// `Class`
pub const CLASS: AttributeType = AttributeType::new(25);
/// `Vendor-Specific`
pub const VENDOR_SPECIFIC: AttributeType = AttributeType::new(26);
/// `Session-Timeout`
pub const SESSION_TIMEOUT: AttributeType = AttributeType::new(27);
/// `Idle-Timeout`
pub const IDLE_TIMEOUT: AttributeType = AttributeType::new(28);
/// `Termination-Action`
pub const TERMINATION_ACTION: AttributeType = AttributeType::new(29);
/// `Called-Station-Id`
pub const CALLED_STATION_ID: AttributeType = AttributeType::new(30);
/// `Calling-Station-Id`
pub const CALLING_STATION_ID: AttributeType = AttributeType::new(31);
/// `NAS-Identifier`
pub const NAS_IDENTIFIER: AttributeType = AttributeType::new(32);
/// `Proxy-State`
pub const PROXY_STATE: AttributeType = AttributeType::new(33);
/// `Login-LAT-Service`
pub const LOGIN_LAT_SERVICE: AttributeType = AttributeType::new(34);
/// `Login-LAT-Node`
pub const LOGIN_LAT_NODE: AttributeType = AttributeType::new(35);
/// `Login-LAT-Group`
pub const LOGIN_LAT_GROUP: AttributeType = AttributeType::new(36);
/// `Framed-AppleTalk-Link`
pub const FRAMED_APPLETALK_LINK: AttributeType = AttributeType::new(37);
/// `Framed-AppleTalk-Network`
pub const FRAMED_APPLETALK_NETWORK: AttributeType = AttributeType::new(38);
/// `Framed-AppleTalk-Zone`
pub const FRAMED_APPLETALK_ZONE: AttributeType = AttributeType::new(39);
/// `CHAP-Challenge`
pub const CHAP_CHALLENGE: AttributeType = AttributeType::new(60);
/// `NAS-Port-Type`
pub const NAS_PORT_TYPE: AttributeType = AttributeType::new(61);
/// `Port-Limit`
pub const PORT_LIMIT: AttributeType = AttributeType::new(62);
/// `Login-LAT-Port`
pub const LOGIN_LAT_PORT: AttributeType = AttributeType::new(63);

const ATTRIBUTES: &[(&str, AttributeType, fn() -> Codec)] = &[
    ("User-Name", USER_NAME, Codec::text),
    ("User-Password", USER_PASSWORD, Codec::octets),
    ("CHAP-Password", CHAP_PASSWORD, Codec::octets),
    ("NAS-IP-Address", NAS_IP_ADDRESS, Codec::address),
    ("NAS-Port", NAS_PORT, Codec::integer),
    ("Service-Type", SERVICE_TYPE, Codec::integer),
    ("Framed-Protocol", FRAMED_PROTOCOL, Codec::integer),
    ("Framed-IP-Address", FRAMED_IP_ADDRESS, Codec::address),
    ("Framed-IP-Netmask", FRAMED_IP_NETMASK, Codec::address),
    ("Framed-Routing", FRAMED_ROUTING, Codec::integer),
    ("Filter-Id", FILTER_ID, Codec::text),
    ("Framed-MTU", FRAMED_MTU, Codec::integer),
    ("Framed-Compression", FRAMED_COMPRESSION, Codec::integer),
    ("Login-IP-Host", LOGIN_IP_HOST, Codec::address),
    ("Login-Service", LOGIN_SERVICE, Codec::integer),
    ("Login-TCP-Port", LOGIN_TCP_PORT, Codec::integer),
    ("Reply-Message", REPLY_MESSAGE, Codec::text),
    ("Callback-Number", CALLBACK_NUMBER, Codec::octets),
    ("Callback-Id", CALLBACK_ID, Codec::octets),
    ("Framed-Route", FRAMED_ROUTE, Codec::text),
    ("Framed-IPX-Network", FRAMED_IPX_NETWORK, Codec::integer),
    ("State", STATE, Codec::octets),
    ("Class", CLASS, Codec::octets),
    ("Vendor-Specific", VENDOR_SPECIFIC, Codec::octets),
    ("Session-Timeout", SESSION_TIMEOUT, Codec::integer),
    ("Idle-Timeout", IDLE_TIMEOUT, Codec::integer),
    ("Termination-Action", TERMINATION_ACTION, Codec::integer),
    ("Called-Station-Id", CALLED_STATION_ID, Codec::octets),
    ("Calling-Station-Id", CALLING_STATION_ID, Codec::octets),
    ("NAS-Identifier", NAS_IDENTIFIER, Codec::octets),
    ("Proxy-State", PROXY_STATE, Codec::octets),
    ("Login-LAT-Service", LOGIN_LAT_SERVICE, Codec::octets),
    ("Login-LAT-Node", LOGIN_LAT_NODE, Codec::octets),
    ("Login-LAT-Group", LOGIN_LAT_GROUP, Codec::octets),
    ("Framed-AppleTalk-Link", FRAMED_APPLETALK_LINK, Codec::integer),
    ("Framed-AppleTalk-Network", FRAMED_APPLETALK_NETWORK, Codec::integer),
    ("Framed-AppleTalk-Zone", FRAMED_APPLETALK_ZONE, Codec::octets),
    ("CHAP-Challenge", CHAP_CHALLENGE, Codec::octets),
    ("NAS-Port-Type", NAS_PORT_TYPE, Codec::integer),
    ("Port-Limit", PORT_LIMIT, Codec::integer),
    ("Login-LAT-Port", LOGIN_LAT_PORT, Codec::octets),
];

/// Register every RFC 2865 attribute into `dictionary`.
///
/// # Panics
///
/// Panics if any of the types or names is already registered.
pub fn register(dictionary: &Dictionary) {
    for &(name, attribute_type, codec) in ATTRIBUTES {
        dictionary.must_register(name, attribute_type, codec());
    }
}
