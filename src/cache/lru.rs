//! LRU Recency Module
//!
//! Implements the recency order used for eviction as a doubly linked list
//! whose nodes live in a slot arena and are linked by `SlotId`.
//!
//! ```text
//!   head (LRU) ─► [a] ◄──► [b] ◄──► [c] ◄── tail (MRU)
//! ```
//!
//! Touch, push, remove and evict are all O(1).

use crate::cache::entry::{Entry, SlotId};
use crate::cache::Key;

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// - Head = least recently used
/// - Tail = most recently used
#[derive(Debug)]
pub struct RecencyList<V> {
    /// Entry arena, `None` marks a free slot
    slots: Vec<Option<Entry<V>>>,
    /// Indices of free slots available for reuse
    free: Vec<usize>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<V> RecencyList<V> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push ==
    /// Inserts a new entry at the most recently used end.
    pub fn push(&mut self, key: Key, value: V) -> SlotId {
        let entry = Entry::new(key, value);
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                SlotId(idx)
            }
            None => {
                self.slots.push(Some(entry));
                SlotId(self.slots.len() - 1)
            }
        };
        self.len += 1;
        self.attach_back(id);
        id
    }

    // == Touch ==
    /// Marks an entry as most recently used (moves it to the tail).
    pub fn touch(&mut self, id: SlotId) {
        if self.tail == Some(id) || !self.contains(id) {
            return;
        }
        self.detach(id);
        self.attach_back(id);
    }

    // == Remove ==
    /// Unlinks an entry and frees its slot.
    ///
    /// Neighbours keep their relative order.
    pub fn remove(&mut self, id: SlotId) -> Option<Entry<V>> {
        if !self.contains(id) {
            return None;
        }
        self.detach(id);
        let entry = self.slots[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(entry)
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn evict_oldest(&mut self) -> Option<Entry<V>> {
        let id = self.head?;
        self.remove(id)
    }

    // == Peek Oldest ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_oldest(&self) -> Option<&Entry<V>> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the most recently used entry.
    pub fn peek_newest(&self) -> Option<&Entry<V>> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: SlotId) -> Option<&Entry<V>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Entry<V>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    // == Contains ==
    /// Checks if a slot currently holds an entry.
    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    // == Length ==
    /// Returns the number of tracked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.get(id) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(entry) = self.get_mut(p) {
                    entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(entry) = self.get_mut(n) {
                    entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(entry) = self.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        if let Some(entry) = self.get_mut(id) {
            entry.prev = old_tail;
            entry.next = None;
        }

        match old_tail {
            Some(t) => {
                if let Some(entry) = self.get_mut(t) {
                    entry.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Walks the list in both directions and panics on broken links.
    #[cfg(test)]
    pub(crate) fn validate_links(&self) {
        let forward: Vec<SlotId> = self.iter_ids().collect();
        assert_eq!(forward.len(), self.len, "forward walk length");

        let mut backward = Vec::with_capacity(self.len);
        let mut current = self.tail;
        while let Some(id) = current {
            backward.push(id);
            current = self.get(id).and_then(|e| e.prev);
        }
        backward.reverse();
        assert_eq!(forward, backward, "backward walk disagrees");

        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(occupied, self.len, "occupied slots");
        assert_eq!(occupied + self.free.len(), self.slots.len(), "free list");
    }

    #[cfg(test)]
    fn iter_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let id = current?;
            current = self.get(id).and_then(|e| e.next);
            Some(id)
        })
    }
}

impl<V> Default for RecencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Iterator over entries from least to most recently used.
pub struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    current: Option<SlotId>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.current?)?;
        self.current = entry.next;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.list.len()))
    }
}
