//! Line-oriented command driver for a `DynamicStore`.
//!
//! Each input line is one command. Keys and values are parsed as JSON; a
//! token that is not valid JSON is taken as a plain string.
//!
//! ```text
//! set <key> <value>   OK
//! get <key>           <value> | (nil)
//! has <key>           true | false
//! del <key>           OK
//! clear               OK
//! len                 <count>
//! keys                <key> ... (least to most recently used)
//! ```

use std::io::{BufRead, Write};

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::DynamicStore;

// == Command ==
/// A parsed driver command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Value, Value),
    Get(Value),
    Has(Value),
    Del(Value),
    Clear,
    Len,
    Keys,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let (name, rest) = split_token(line.trim());
        if name.is_empty() {
            return Ok(None);
        }

        let command = match name.to_ascii_lowercase().as_str() {
            "set" => {
                let (key, value) = split_token(rest);
                if key.is_empty() || value.is_empty() {
                    return Err("usage: set <key> <value>".to_string());
                }
                Command::Set(parse_token(key), parse_token(value))
            }
            "get" => Command::Get(single_arg("get", rest)?),
            "has" => Command::Has(single_arg("has", rest)?),
            "del" => Command::Del(single_arg("del", rest)?),
            "clear" => Command::Clear,
            "len" => Command::Len,
            "keys" => Command::Keys,
            other => return Err(format!("unknown command '{}'", other)),
        };
        Ok(Some(command))
    }

    /// Runs the command against `store` and renders the reply line.
    pub fn execute(self, store: &mut DynamicStore) -> String {
        match self {
            Command::Set(key, value) => match store.set(&key, value) {
                Ok(()) => "OK".to_string(),
                Err(e) => format!("error: {}", e),
            },
            Command::Get(key) => match store.get(&key) {
                Ok(Some(value)) => value.to_string(),
                Ok(None) => "(nil)".to_string(),
                Err(e) => format!("error: {}", e),
            },
            Command::Has(key) => match store.has(&key) {
                Ok(found) => found.to_string(),
                Err(e) => format!("error: {}", e),
            },
            Command::Del(key) => {
                store.unset(&key);
                "OK".to_string()
            }
            Command::Clear => {
                store.clear();
                "OK".to_string()
            }
            Command::Len => store.len().to_string(),
            Command::Keys => store
                .keys()
                .map(|key| key.to_json().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

fn parse_token(token: &str) -> Value {
    serde_json::from_str(token).unwrap_or_else(|_| Value::String(token.to_string()))
}

fn single_arg(name: &str, rest: &str) -> Result<Value, String> {
    let (key, extra) = split_token(rest);
    if key.is_empty() || !extra.is_empty() {
        return Err(format!("usage: {} <key>", name));
    }
    Ok(parse_token(key))
}

// == Run ==
/// Reads commands from `input` until EOF, writing one reply per command.
pub fn run<R: BufRead, W: Write>(
    store: &mut DynamicStore,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let reply = match Command::parse(&line) {
            Ok(Some(command)) => {
                debug!(?command, "executing");
                command.execute(store)
            }
            Ok(None) => continue,
            Err(msg) => {
                warn!("rejected input line: {}", msg);
                format!("error: {}", msg)
            }
        };
        writeln!(output, "{}", reply)?;
    }
    output.flush()?;
    Ok(())
}
