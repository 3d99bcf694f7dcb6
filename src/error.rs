//! Error types for the LRU store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == LRU Error Enum ==
/// Unified error type for the LRU store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LruError {
    /// Capacity is not a positive integer
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key is not a string or an integer
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

// == Result Type Alias ==
/// Convenience Result type for the LRU store.
pub type Result<T> = std::result::Result<T, LruError>;
