//! In-memory attribute store.

use std::collections::{BTreeMap, BTreeSet};

use tessera_value::DynamicValue;

use crate::error::StateError;
use crate::traits::{StateAccessor, StateWriter};

/// A map-backed state store implementing both capabilities.
///
/// An open store accepts writes to any key. A store built with
/// [`with_declared_keys`](AttributeStore::with_declared_keys) rejects
/// writes outside its declared schema with [`StateError::UnknownKey`],
/// the behavior host frameworks exhibit when a resource publishes an
/// attribute its schema never declared.
///
/// The store also carries the resource identifier slot the lifecycle
/// layer stamps on import and create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    attributes: BTreeMap<String, DynamicValue>,
    declared: Option<BTreeSet<String>>,
    id: Option<String>,
}

impl AttributeStore {
    /// An empty store accepting writes to any key.
    pub fn new() -> Self {
        AttributeStore::default()
    }

    /// An empty store rejecting writes outside `keys`.
    pub fn with_declared_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        AttributeStore {
            attributes: BTreeMap::new(),
            declared: Some(keys.into_iter().map(Into::into).collect()),
            id: None,
        }
    }

    /// An open store seeded with the given entries.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, DynamicValue)>,
        K: Into<String>,
    {
        AttributeStore {
            attributes: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            declared: None,
            id: None,
        }
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The full key→value snapshot, for inspection and tests.
    pub fn attributes(&self) -> &BTreeMap<String, DynamicValue> {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }
}

impl StateAccessor for AttributeStore {
    fn get(&self, key: &str) -> Option<DynamicValue> {
        self.attributes.get(key).cloned()
    }
}

impl StateWriter for AttributeStore {
    fn set(&mut self, key: &str, value: DynamicValue) -> Result<(), StateError> {
        if let Some(declared) = &self.declared {
            if !declared.contains(key) {
                return Err(StateError::UnknownKey {
                    key: key.to_string(),
                });
            }
        }
        self.attributes.insert(key.to_string(), value);
        Ok(())
    }
}
