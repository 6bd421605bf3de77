//! Ordered string-keyed payload map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered string-keyed map used to assemble event payloads.
///
/// Keys keep their insertion order through serialization. Absent values
/// (`None`, empty strings, JSON `null`) are never stored: inserting one
/// removes any entry already present under that key, so a payload never
/// carries a placeholder for a field the caller cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    entries: Map<String, Value>,
}

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a string value under `key`.
    ///
    /// An empty value removes the entry instead of storing an empty
    /// string.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.entries.shift_remove(&key);
            return;
        }
        self.entries.insert(key, Value::String(value));
    }

    /// Inserts an optional string value under `key`.
    ///
    /// `None` behaves like an empty value: the entry is removed rather
    /// than stored.
    pub fn add_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        match value {
            Some(value) => self.add(key, value),
            None => {
                self.entries.shift_remove(&key.into());
            }
        }
    }

    /// Inserts a non-string JSON value (boolean, number, array, object)
    /// under `key`.
    ///
    /// `Value::Null` and empty strings are treated as absent, like
    /// [`add`](Self::add).
    pub fn add_value(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match value {
            Value::Null => {
                self.entries.shift_remove(&key);
            }
            Value::String(s) if s.is_empty() => {
                self.entries.shift_remove(&key);
            }
            other => {
                self.entries.insert(key, other);
            }
        }
    }

    /// Folds another payload's entries into this one, in their order.
    pub fn extend(&mut self, other: Payload) {
        self.entries.extend(other.entries);
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consumes the payload into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}
