//! Attribute factory.
//!
//! Turns a symbolic name and a raw application value into an [`Attribute`]
//! the packet encoder can serialize. The dictionary lock is released before
//! the codec's transformer runs.

use radius_proto::{Attribute, AttributeValue};
use tracing::trace;

use crate::{
    dictionary::Dictionary,
    error::{DictionaryError, Result},
};

impl Dictionary {
    /// Build an attribute for `name` from a raw value.
    ///
    /// If the codec registered under `name` carries a transformer, `value` is
    /// passed through it first; otherwise it is used as-is.
    ///
    /// # Errors
    ///
    /// - `NameNotRegistered` if `name` is unknown. Nothing else happens.
    /// - `Transform` with the transformer's error, verbatim.
    pub fn attr(&self, name: &str, value: impl Into<AttributeValue>) -> Result<Attribute> {
        let Some((attribute_type, codec)) = self.lookup(name) else {
            return Err(DictionaryError::NameNotRegistered(name.to_owned()));
        };

        let value = value.into();
        let value = match codec.transformer() {
            Some(transformer) => transformer.transform(value)?,
            None => value,
        };

        trace!(name, %attribute_type, kind = value.kind(), "built attribute");
        Ok(Attribute::new(attribute_type, value))
    }

    /// Build an attribute, panicking on failure.
    ///
    /// Only for trusted, compile-time-known names and values, where a failure
    /// is a programming error. Never use it on untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if [`Self::attr`] fails.
    #[allow(clippy::panic)]
    pub fn must_attr(&self, name: &str, value: impl Into<AttributeValue>) -> Attribute {
        match self.attr(name, value) {
            Ok(attribute) => attribute,
            Err(err) => panic!("radius: {err}"),
        }
    }
}
