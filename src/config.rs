//! Configuration Module
//!
//! Handles loading the store capacity from environment variables.

use std::env;

/// Default number of entries when `LRU_CAPACITY` is unset or unparsable.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Store configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the store can hold
    pub capacity: usize,
}

impl Config {
    /// Creates a Config with an explicit capacity.
    ///
    /// The value is not validated here; `LruStore::from_config` rejects zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Maximum store entries (default: 1000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("LRU_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
