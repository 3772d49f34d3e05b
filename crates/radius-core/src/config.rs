//! Dictionary configuration.

/// What [`crate::Dictionary::register`] does when the name is already bound
/// to a different type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameCollision {
    /// Fail with [`crate::DictionaryError::NameAlreadyRegistered`] and leave
    /// the dictionary unchanged.
    #[default]
    Reject,

    /// Evict the existing entry from both indices, then register the new
    /// one. The old type slot becomes free.
    Replace,
}

/// Dictionary configuration
#[derive(Debug, Clone, Default)]
pub struct DictionaryConfig {
    /// Name collision policy
    pub name_collision: NameCollision,
}
