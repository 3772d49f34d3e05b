//! Drive a dictionary with arbitrary register/remove sequences.
//!
//! Each input byte pair is one operation. The two indices must agree after
//! every step.

#![no_main]

use libfuzzer_sys::fuzz_target;
use radius_core::{Dictionary, DictionaryConfig, NameCollision};
use radius_proto::{AttributeType, Codec};

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fuzz_target!(|data: &[u8]| {
    let Some((&policy, ops)) = data.split_first() else {
        return;
    };

    let name_collision =
        if policy & 1 == 0 { NameCollision::Reject } else { NameCollision::Replace };
    let dict = Dictionary::with_config(DictionaryConfig { name_collision });

    for op in ops.chunks_exact(2) {
        let (code, arg) = (op[0], op[1]);
        let name = NAMES[usize::from(code >> 5) & 7];
        match code & 3 {
            0 | 1 => {
                let _ = dict.register(name, AttributeType::new(arg), Codec::octets());
            },
            2 => {
                let _ = dict.remove(AttributeType::new(arg));
            },
            _ => {
                let _ = dict.remove_by_name(name);
            },
        }

        assert!(dict.snapshot().is_consistent());
    }
});
