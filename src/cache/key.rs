//! Key Module
//!
//! The closed set of types accepted as store keys: strings and integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LruError, Result};

// == Key ==
/// A store key. Only strings and integers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Validates a dynamic JSON value as a key.
    ///
    /// Strings and integers that fit in an `i64` are accepted. Null,
    /// booleans, floats, arrays and objects fail with `InvalidKey`.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Key::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(Key::Int).ok_or_else(|| {
                LruError::InvalidKey(format!("number {} is not an integer key", n))
            }),
            other => Err(LruError::InvalidKey(format!(
                "{} is not a string or integer",
                json_type_name(other)
            ))),
        }
    }

    /// Converts the key back into its JSON representation.
    pub fn to_json(&self) -> Value {
        match self {
            Key::Int(i) => Value::from(*i),
            Key::Str(s) => Value::String(s.clone()),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&Value> for Key {
    type Error = LruError;

    fn try_from(value: &Value) -> Result<Self> {
        Key::from_json(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(i: $t) -> Self {
                    Key::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Key {
    fn from(i: isize) -> Self {
        Key::Int(i as i64)
    }
}
