//! Decode arbitrary value bytes with every built-in codec.
//!
//! Decoding must never panic, and anything that decodes must re-encode to
//! the same bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use radius_proto::{Codec, MAX_VALUE_LEN};

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_VALUE_LEN {
        return;
    }

    let codecs = [
        Codec::Unknown,
        Codec::octets(),
        Codec::text(),
        Codec::integer(),
        Codec::address(),
        Codec::time(),
    ];

    for codec in &codecs {
        if let Ok(value) = codec.decode(data) {
            let encoded = codec.encode(&value).expect("decoded value must re-encode");
            assert_eq!(&encoded[..], data, "round trip changed bytes for {codec:?}");
        }
    }
});
