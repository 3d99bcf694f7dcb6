//! Cache Module
//!
//! Provides a fixed-capacity in-memory store with LRU eviction.

mod dynamic;
mod entry;
mod key;
mod lru;
mod store;


// Re-export public types
pub use dynamic::DynamicStore;
pub use entry::{Entry, SlotId};
pub use key::Key;
pub use lru::RecencyList;
pub use store::LruStore;
