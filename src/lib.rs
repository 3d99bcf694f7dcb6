//! LRU Store - a fixed-capacity key-value cache
//!
//! Keeps at most `N` entries and evicts the least recently used one when a
//! new key would overflow. Reads and writes both count as use.

pub mod cache;
pub mod config;
pub mod error;
pub mod shell;

pub use cache::{DynamicStore, Key, LruStore};
pub use config::Config;
pub use error::{LruError, Result};
