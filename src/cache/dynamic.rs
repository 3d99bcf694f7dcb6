//! Dynamic Store Module
//!
//! Index-style accessors over untyped JSON keys and values. Keys are
//! validated here; every operation then delegates to `LruStore`.

use serde_json::Value;

use crate::cache::{Key, LruStore};
use crate::config::Config;
use crate::error::Result;

// == Dynamic Store ==
/// `LruStore` wrapper accepting `serde_json::Value` keys.
///
/// Only JSON strings and integers are valid keys; anything else fails with
/// `InvalidKey` before the store is touched. A key holding JSON `null`
/// reports as absent from `has`.
#[derive(Debug)]
pub struct DynamicStore {
    inner: LruStore<Value>,
}

impl DynamicStore {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: LruStore::new(capacity)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            inner: LruStore::from_config(config)?,
        })
    }

    /// Reads a value, promoting it. `Ok(None)` on a miss.
    pub fn get(&mut self, key: &Value) -> Result<Option<Value>> {
        let key = Key::from_json(key)?;
        Ok(self.inner.get(key).cloned())
    }

    /// Reads a value, or returns `default` on a miss.
    pub fn get_or(&mut self, key: &Value, default: Value) -> Result<Value> {
        let key = Key::from_json(key)?;
        Ok(self.inner.get_or(key, default))
    }

    pub fn set(&mut self, key: &Value, value: Value) -> Result<()> {
        let key = Key::from_json(key)?;
        self.inner.set(key, value);
        Ok(())
    }

    /// Existence check layered on `get`.
    ///
    /// A stored `null` counts as absent. A hit promotes the entry.
    pub fn has(&mut self, key: &Value) -> Result<bool> {
        Ok(self.get(key)?.map_or(false, |value| !value.is_null()))
    }

    /// Removes the entry for `key`. Keys of invalid type are never present,
    /// so they are ignored.
    pub fn unset(&mut self, key: &Value) -> Option<Value> {
        let key = Key::from_json(key).ok()?;
        self.inner.remove(key)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Borrows the underlying typed store.
    pub fn as_store(&self) -> &LruStore<Value> {
        &self.inner
    }
}
