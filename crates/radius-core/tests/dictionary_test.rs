//! Dictionary behaviour tests.
//!
//! End-to-end checks of registration, lookup, removal and the attribute
//! factory through the public API.

use std::sync::Arc;

use bytes::Bytes;
use radius_core::{AttributeKey, Dictionary, DictionaryError, rfc2865};
use radius_proto::{
    AttributeCodec, AttributeTransformer, AttributeType, AttributeValue, Codec, CodecError,
};

const LOGIN_SERVICE: AttributeType = AttributeType::new(0x01);

/// Codec that lowercases text and rejects empty values.
#[derive(Debug)]
struct Lowercase;

impl AttributeCodec for Lowercase {
    fn decode(&self, wire: &[u8]) -> radius_proto::Result<AttributeValue> {
        let text = std::str::from_utf8(wire).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(AttributeValue::Text(text.to_owned()))
    }

    fn encode(&self, value: &AttributeValue) -> radius_proto::Result<Bytes> {
        match value {
            AttributeValue::Text(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            other => Err(CodecError::TypeMismatch { expected: "text", actual: other.kind() }),
        }
    }
}

impl AttributeTransformer for Lowercase {
    fn transform(&self, value: AttributeValue) -> radius_proto::Result<AttributeValue> {
        match value {
            AttributeValue::Text(text) if text.is_empty() => {
                Err(CodecError::other("empty realm"))
            },
            AttributeValue::Text(text) => Ok(AttributeValue::Text(text.to_lowercase())),
            other => Err(CodecError::TypeMismatch { expected: "text", actual: other.kind() }),
        }
    }
}

#[test]
fn login_service_lifecycle() {
    let dict = Dictionary::new();
    let codec_a = Codec::integer();

    dict.register("Login-Service", LOGIN_SERVICE, codec_a.clone()).unwrap();

    assert_eq!(dict.attribute_type("Login-Service"), Some(LOGIN_SERVICE));
    assert_eq!(dict.name(LOGIN_SERVICE).as_deref(), Some("Login-Service"));
    assert_eq!(dict.codec(LOGIN_SERVICE), codec_a);

    dict.remove_by_name("Login-Service").unwrap();

    assert_eq!(dict.attribute_type("Login-Service"), None);
    assert!(dict.codec(LOGIN_SERVICE).is_unknown());
}

#[test]
fn lookup_and_type_index_share_entry() {
    let dict = Dictionary::new();
    rfc2865::register(&dict);

    for entry in dict.entries() {
        let (attribute_type, codec) = dict.lookup(entry.name()).unwrap();
        assert_eq!(attribute_type, entry.attribute_type());
        assert_eq!(&codec, entry.codec());

        let by_name = dict.entry_by_name(entry.name()).unwrap();
        assert!(Arc::ptr_eq(&by_name, &entry));
    }
}

#[test]
fn duplicate_type_leaves_original_unchanged() {
    let dict = Dictionary::new();
    dict.register("Login-Service", LOGIN_SERVICE, Codec::integer()).unwrap();
    let before = dict.entry(LOGIN_SERVICE).unwrap();

    let err = dict.register("Impostor", LOGIN_SERVICE, Codec::text()).unwrap_err();
    assert!(matches!(err, DictionaryError::AlreadyRegistered(t) if t == LOGIN_SERVICE));

    let after = dict.entry(LOGIN_SERVICE).unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(dict.len(), 1);
}

#[test]
fn remove_by_type_clears_name() {
    let dict = Dictionary::new();
    dict.register("Login-Service", LOGIN_SERVICE, Codec::integer()).unwrap();

    dict.remove(LOGIN_SERVICE).unwrap();

    assert!(dict.lookup("Login-Service").is_none());
    assert!(dict.name(LOGIN_SERVICE).is_none());
    assert!(matches!(
        dict.remove_by_name("Login-Service"),
        Err(DictionaryError::NotRegistered(AttributeKey::Name(_)))
    ));
}

#[test]
fn custom_transformer_output_is_packaged() {
    let dict = Dictionary::new();
    dict.register("Realm", AttributeType::new(200), Codec::transforming(Lowercase)).unwrap();

    let attr = dict.attr("Realm", "EXAMPLE.Net").unwrap();
    assert_eq!(attr.attribute_type, AttributeType::new(200));
    assert_eq!(attr.value, AttributeValue::Text("example.net".into()));
}

#[test]
fn custom_transformer_error_is_verbatim() {
    let dict = Dictionary::new();
    dict.register("Realm", AttributeType::new(200), Codec::transforming(Lowercase)).unwrap();

    let err = dict.attr("Realm", "").unwrap_err();
    assert!(matches!(err, DictionaryError::Transform(CodecError::Other(_))));
    assert_eq!(err.to_string(), "empty realm");
}

#[test]
fn separate_transformer_is_detected() {
    let dict = Dictionary::new();
    let codec = Codec::with_transformer(Lowercase, Lowercase);
    dict.register("Realm", AttributeType::new(200), codec).unwrap();

    let attr = dict.attr("Realm", "ABC").unwrap();
    assert_eq!(attr.value, AttributeValue::Text("abc".into()));
}

#[test]
fn unknown_name_has_no_side_effects() {
    let dict = Dictionary::new();
    rfc2865::register(&dict);
    let before = dict.len();

    let err = dict.attr("Not-An-Attribute", "value").unwrap_err();
    assert!(matches!(err, DictionaryError::NameNotRegistered(_)));
    assert_eq!(dict.len(), before);
    assert!(dict.snapshot().is_consistent());
}

#[test]
fn decode_with_registered_codec() {
    let dict = Dictionary::new();
    rfc2865::register(&dict);

    let codec = dict.codec(rfc2865::SESSION_TIMEOUT);
    assert_eq!(codec.decode(&[0, 0, 0x0e, 0x10]).unwrap(), AttributeValue::Integer(3600));

    let unknown = dict.codec(AttributeType::new(17));
    assert_eq!(
        unknown.decode(&[1, 2, 3]).unwrap(),
        AttributeValue::Octets(Bytes::from_static(&[1, 2, 3]))
    );
}

#[test]
fn must_attr_for_trusted_values() {
    let dict = Dictionary::new();
    rfc2865::register(&dict);

    let attr = dict.must_attr("User-Name", "alice");
    assert_eq!(attr.attribute_type, rfc2865::USER_NAME);
    assert_eq!(attr.value, AttributeValue::Text("alice".into()));
}

#[test]
#[should_panic(expected = "expected integer value, got text")]
fn must_attr_panics_on_transform_error() {
    let dict = Dictionary::new();
    rfc2865::register(&dict);

    dict.must_attr("NAS-Port", "seven");
}
