//! Cache Store Module
//!
//! Main cache engine combining a HashMap lookup table with the recency list.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cache::entry::SlotId;
use crate::cache::{Key, RecencyList};
use crate::config::Config;
use crate::error::{LruError, Result};

// == LRU Store ==
/// Fixed-capacity key-value store with least-recently-used eviction.
///
/// Every successful `get` or `set` makes its key the most recently used.
/// Inserting a new key into a full store evicts the least recently used
/// entry first. Overwriting an existing key never evicts.
#[derive(Debug)]
pub struct LruStore<V> {
    /// Key to slot lookup table
    index: HashMap<Key, SlotId>,
    /// Entries in recency order
    order: RecencyList<V>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V> LruStore<V> {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// Fails with `InvalidConfiguration` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LruError::InvalidConfiguration(
                "capacity must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Creates a store sized from the given configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Get ==
    /// Retrieves a value by key, promoting it to most recently used.
    ///
    /// A miss returns `None` and leaves the order untouched.
    pub fn get(&mut self, key: impl Into<Key>) -> Option<&V> {
        let key = key.into();
        let id = *self.index.get(&key)?;
        self.order.touch(id);
        trace!(key = %key, "promoted entry");
        self.order.get(id).map(|entry| &entry.value)
    }

    /// Retrieves a value by key, or `default` on a miss.
    pub fn get_or(&mut self, key: impl Into<Key>, default: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// An existing key is overwritten and promoted without any eviction.
    /// A new key is inserted as most recently used, evicting the least
    /// recently used entry first if the store is full.
    pub fn set(&mut self, key: impl Into<Key>, value: V) {
        let key = key.into();

        // Overwrite is checked before capacity so it never evicts
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.value = value;
            }
            self.order.touch(id);
            return;
        }

        if self.order.len() >= self.capacity {
            if let Some(evicted) = self.order.evict_oldest() {
                self.index.remove(&evicted.key);
                debug!(key = %evicted.key, "evicted least recently used entry");
            }
        }

        let id = self.order.push(key.clone(), value);
        self.index.insert(key, id);
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    ///
    /// Absent keys are a no-op. The remaining entries keep their order.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        let key = key.into();
        let id = self.index.remove(&key)?;
        self.order.remove(id).map(|entry| entry.value)
    }

    // == Clear ==
    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        debug!(entries = self.order.len(), "clearing store");
        self.index.clear();
        self.order.clear();
    }

    // == Peek ==
    /// Returns a value without promoting it.
    pub fn peek(&self, key: impl Into<Key>) -> Option<&V> {
        let id = self.index.get(&key.into())?;
        self.order.get(*id).map(|entry| &entry.value)
    }

    /// Returns true if the key is held, without promoting it.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.index.contains_key(&key.into())
    }

    /// Returns the entry that would be evicted next.
    pub fn peek_lru(&self) -> Option<(&Key, &V)> {
        self.order
            .peek_oldest()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.order.iter().map(|entry| &entry.key)
    }

    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> + '_ {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn validate(&self) {
        self.order.validate_links();
        assert_eq!(self.index.len(), self.order.len(), "index size");
        assert!(self.order.len() <= self.capacity, "capacity exceeded");
        for (key, id) in &self.index {
            let entry = self.order.get(*id).expect("indexed slot is empty");
            assert_eq!(&entry.key, key, "index points at wrong entry");
        }
    }
}
