//! Cache Entry Module
//!
//! Defines the entry held by the store together with its recency links.

use crate::cache::Key;

// == Slot Id ==
/// Stable index of an entry inside the recency list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

// == Entry ==
/// A key-value pair linked into the recency order.
///
/// `prev` points towards the least recently used end, `next` towards the
/// most recently used end.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// The key this entry is stored under
    pub key: Key,
    /// The stored value
    pub value: V,
    pub(crate) prev: Option<SlotId>,
    pub(crate) next: Option<SlotId>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: Key, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Returns true if the entry is not linked to any neighbour.
    pub fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_pair(self) -> (Key, V) {
        (self.key, self.value)
    }
}
