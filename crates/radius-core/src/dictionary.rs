//! Attribute dictionary: entries, indices and lookups.
//!
//! # Invariant
//!
//! Every occupied type slot has exactly one name key pointing at the same
//! [`DictionaryEntry`] allocation, and every name key points at an entry
//! whose type slot holds that allocation. Both indices are updated inside
//! one exclusive lock, so the invariant holds at every point a reader can
//! observe.

use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::RwLock;
use radius_proto::{AttributeType, Codec};
use tracing::{debug, warn};

use crate::{
    config::{DictionaryConfig, NameCollision},
    error::{AttributeKey, DictionaryError, Result},
};

/// Immutable binding of one attribute type, one name and one codec.
///
/// Entries are shared between the two indices and handed out as
/// `Arc<DictionaryEntry>`. Rebinding a name or type means removing the entry
/// and registering a new one.
#[derive(Debug)]
pub struct DictionaryEntry {
    attribute_type: AttributeType,
    name: String,
    codec: Codec,
}

impl DictionaryEntry {
    /// Wire type
    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    /// Symbolic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value codec
    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}

struct Indices {
    by_type: [Option<Arc<DictionaryEntry>>; AttributeType::COUNT],
    by_name: HashMap<String, Arc<DictionaryEntry>>,
}

impl Indices {
    fn new() -> Self {
        Self { by_type: [const { None }; AttributeType::COUNT], by_name: HashMap::new() }
    }

    fn slot(&self, attribute_type: AttributeType) -> Option<&Arc<DictionaryEntry>> {
        self.by_type[attribute_type.index()].as_ref()
    }
}

/// Thread-safe mapping between attribute names, types and codecs.
///
/// Lookups take a shared lock; registration and removal take an exclusive
/// lock for the whole two-index update. Each operation does O(1) work under
/// the lock, and codecs are never invoked while it is held.
pub struct Dictionary {
    config: DictionaryConfig,
    indices: RwLock<Indices>,
}

impl Dictionary {
    /// Create an empty dictionary with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    /// Create an empty dictionary.
    pub fn with_config(config: DictionaryConfig) -> Self {
        Self { config, indices: RwLock::new(Indices::new()) }
    }

    /// Configuration this dictionary was built with.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Register `codec` for the attribute `name` with wire type
    /// `attribute_type`.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if the type slot is occupied. The existing entry
    ///   is left untouched.
    /// - `NameAlreadyRegistered` if the name is bound to another type and the
    ///   collision policy is [`NameCollision::Reject`].
    pub fn register(
        &self,
        name: impl Into<String>,
        attribute_type: AttributeType,
        codec: Codec,
    ) -> Result<()> {
        let name = name.into();

        let mut guard = self.indices.write();
        let indices = &mut *guard;

        if indices.slot(attribute_type).is_some() {
            drop(guard);
            warn!(%attribute_type, name, "attribute type already registered");
            return Err(DictionaryError::AlreadyRegistered(attribute_type));
        }

        let evicted = indices.by_name.get(&name).map(|entry| entry.attribute_type);
        if let Some(evicted) = evicted {
            match self.config.name_collision {
                NameCollision::Reject => {
                    drop(guard);
                    warn!(%attribute_type, %evicted, name, "attribute name already registered");
                    return Err(DictionaryError::NameAlreadyRegistered(name));
                },
                NameCollision::Replace => {
                    indices.by_type[evicted.index()] = None;
                },
            }
        }

        let entry = Arc::new(DictionaryEntry { attribute_type, name, codec });
        indices.by_type[attribute_type.index()] = Some(Arc::clone(&entry));
        indices.by_name.insert(entry.name.clone(), Arc::clone(&entry));
        drop(guard);

        match evicted {
            Some(evicted) => {
                debug!(%attribute_type, %evicted, name = entry.name, "replaced attribute");
            },
            None => debug!(%attribute_type, name = entry.name, "registered attribute"),
        }
        Ok(())
    }

    /// Register an attribute, panicking on failure.
    ///
    /// Only for static registration tables where a collision is a
    /// programming error.
    ///
    /// # Panics
    ///
    /// Panics if [`Self::register`] fails.
    #[allow(clippy::panic)]
    pub fn must_register(
        &self,
        name: impl Into<String>,
        attribute_type: AttributeType,
        codec: Codec,
    ) {
        if let Err(err) = self.register(name, attribute_type, codec) {
            panic!("radius: {err}");
        }
    }

    /// Remove the entry registered under `attribute_type` from both indices.
    ///
    /// Returns the removed entry.
    pub fn remove(&self, attribute_type: AttributeType) -> Result<Arc<DictionaryEntry>> {
        let mut guard = self.indices.write();
        let indices = &mut *guard;

        let Some(entry) = indices.by_type[attribute_type.index()].take() else {
            return Err(DictionaryError::NotRegistered(AttributeKey::Type(attribute_type)));
        };
        indices.by_name.remove(&entry.name);
        drop(guard);

        debug!(%attribute_type, name = entry.name, "removed attribute");
        Ok(entry)
    }

    /// Remove the entry registered under `name` from both indices.
    ///
    /// Returns the removed entry.
    pub fn remove_by_name(&self, name: &str) -> Result<Arc<DictionaryEntry>> {
        let mut guard = self.indices.write();
        let indices = &mut *guard;

        let Some(entry) = indices.by_name.remove(name) else {
            return Err(DictionaryError::NotRegistered(AttributeKey::Name(name.to_owned())));
        };
        indices.by_type[entry.attribute_type.index()] = None;
        drop(guard);

        debug!(attribute_type = %entry.attribute_type, name, "removed attribute");
        Ok(entry)
    }

    /// Type and codec registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<(AttributeType, Codec)> {
        let indices = self.indices.read();
        indices.by_name.get(name).map(|entry| (entry.attribute_type, entry.codec.clone()))
    }

    /// Name registered for `attribute_type`.
    pub fn name(&self, attribute_type: AttributeType) -> Option<String> {
        let indices = self.indices.read();
        indices.slot(attribute_type).map(|entry| entry.name.clone())
    }

    /// Type registered under `name`.
    pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
        let indices = self.indices.read();
        indices.by_name.get(name).map(|entry| entry.attribute_type)
    }

    /// Codec for `attribute_type`.
    ///
    /// Unregistered types yield [`Codec::Unknown`], never an absent value.
    pub fn codec(&self, attribute_type: AttributeType) -> Codec {
        let indices = self.indices.read();
        indices.slot(attribute_type).map_or(Codec::Unknown, |entry| entry.codec.clone())
    }

    /// Entry registered for `attribute_type`.
    pub fn entry(&self, attribute_type: AttributeType) -> Option<Arc<DictionaryEntry>> {
        let indices = self.indices.read();
        indices.slot(attribute_type).cloned()
    }

    /// Entry registered under `name`.
    pub fn entry_by_name(&self, name: &str) -> Option<Arc<DictionaryEntry>> {
        let indices = self.indices.read();
        indices.by_name.get(name).cloned()
    }

    /// Number of registered attributes.
    pub fn len(&self) -> usize {
        self.indices.read().by_name.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, ordered by type.
    pub fn entries(&self) -> Vec<Arc<DictionaryEntry>> {
        let indices = self.indices.read();
        indices.by_type.iter().flatten().cloned().collect()
    }

    /// Capture both indices under a single shared lock.
    pub fn snapshot(&self) -> DictionarySnapshot {
        let indices = self.indices.read();

        let by_type = indices
            .by_type
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| {
                entry.as_ref().map(|entry| (AttributeType::new(slot as u8), Arc::clone(entry)))
            })
            .collect();

        let mut by_name: Vec<_> = indices
            .by_name
            .iter()
            .map(|(name, entry)| (name.clone(), Arc::clone(entry)))
            .collect();
        drop(indices);

        by_name.sort_by_key(|(_, entry)| entry.attribute_type);

        DictionarySnapshot { by_type, by_name }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Point-in-time copy of both dictionary indices.
#[derive(Debug, Clone)]
pub struct DictionarySnapshot {
    /// Occupied type slots, in slot order
    pub by_type: Vec<(AttributeType, Arc<DictionaryEntry>)>,

    /// Name keys, ordered by the type of the entry they point at
    pub by_name: Vec<(String, Arc<DictionaryEntry>)>,
}

impl DictionarySnapshot {
    /// Check the bidirectional index invariant.
    ///
    /// True when every type slot and every name key refer to the same entry
    /// allocation, and each key matches the entry it points at.
    pub fn is_consistent(&self) -> bool {
        self.by_type.len() == self.by_name.len()
            && self.by_type.iter().zip(&self.by_name).all(|((slot, a), (name, b))| {
                Arc::ptr_eq(a, b) && a.attribute_type == *slot && a.name == *name
            })
    }
}
