//! RADIUS attribute dictionary
//!
//! Maps symbolic attribute names to one-byte attribute types and to the
//! codec that handles each type's value. Packet encoders ask the dictionary
//! to turn `("User-Name", "alice")` into a typed [`Attribute`]; packet
//! decoders ask it for the name and codec behind a raw type byte.
//!
//! # Architecture
//!
//! A [`Dictionary`] keeps two indices over the same set of shared entries:
//! a 256-slot table keyed by type and a map keyed by name. Both sit behind a
//! single reader/writer lock, so any number of encoders and decoders read
//! concurrently while registration and removal update both indices in one
//! exclusive critical section. Readers never see an entry in one index but
//! not the other.
//!
//! Unregistered types resolve to [`Codec::Unknown`], a byte pass-through, so
//! decoders never branch on presence.
//!
//! # Components
//!
//! - [`dictionary`]: entries, indices, registration and lookups
//! - [`attr`]: attribute factory (name + raw value to [`Attribute`])
//! - [`mod@builtin`]: the process-wide dictionary
//! - [`rfc2865`], [`rfc2866`]: standard attribute tables for bootstrap code
//! - [`config`]: dictionary configuration
//! - [`error`]: dictionary error types
//!
//! [`Attribute`]: radius_proto::Attribute
//! [`Codec::Unknown`]: radius_proto::Codec::Unknown

pub mod attr;
pub mod builtin;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod rfc2865;
pub mod rfc2866;

pub use builtin::builtin;
pub use config::{DictionaryConfig, NameCollision};
pub use dictionary::{Dictionary, DictionaryEntry, DictionarySnapshot};
pub use error::{AttributeKey, DictionaryError, Result};
