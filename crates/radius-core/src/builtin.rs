//! Process-wide dictionary.
//!
//! The process-wide dictionary is created on first access and lives until the
//! process exits. It starts empty: bootstrap code registers the standard
//! attributes into it once, e.g.
//!
//! ```
//! radius_core::rfc2865::register(radius_core::builtin());
//! assert!(radius_core::builtin().attribute_type("User-Name").is_some());
//! ```
//!
//! Code that needs an isolated dictionary (tests, per-tenant vendor sets)
//! builds its own with [`Dictionary::new`].

use std::sync::OnceLock;

use tracing::debug;

use crate::dictionary::Dictionary;

static BUILTIN: OnceLock<Dictionary> = OnceLock::new();

/// The process-wide dictionary.
///
/// Concurrent first calls run the initializer exactly once; every caller
/// gets the same fully-constructed instance.
pub fn builtin() -> &'static Dictionary {
    BUILTIN.get_or_init(|| {
        debug!("creating process-wide attribute dictionary");
        Dictionary::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_stable() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }
}
