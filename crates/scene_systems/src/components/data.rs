//! Scene-scoped key/value store

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value stored in a scene's data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// Text
    Text(String),
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Data store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Writes are rejected while frozen
    #[error("Data store is frozen; cannot modify '{0}'")]
    Frozen(String),
}

/// Arbitrary key/value data attached to a scene
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Data {
    values: HashMap<String, DataValue>,
    frozen: bool,
}

impl Data {
    /// Create an empty, unfrozen store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, returning the previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<DataValue>) -> Result<Option<DataValue>, DataError> {
        let key = key.into();
        if self.frozen {
            return Err(DataError::Frozen(key));
        }
        Ok(self.values.insert(key, value.into()))
    }

    /// Read a value
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.values.get(key)
    }

    /// Whether a value is stored under `key`
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a value
    pub fn remove(&mut self, key: &str) -> Result<Option<DataValue>, DataError> {
        if self.frozen {
            return Err(DataError::Frozen(key.to_string()));
        }
        Ok(self.values.remove(key))
    }

    /// Stored keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reject further writes
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Accept writes again
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Whether writes are rejected
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Remove everything. Clearing ignores the frozen flag and unfreezes.
    pub fn clear(&mut self) {
        self.values.clear();
        self.frozen = false;
    }
}
