//! Test stores — mock `DurableStore` implementations for tests.

use std::collections::HashMap;

use retroboard_core::error::DomainError;
use retroboard_core::store::DurableStore;

/// An in-memory store that records every `set` call in order.
#[derive(Debug, Default)]
pub struct RecordingStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl RecordingStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`. Pre-populated entries are
    /// not recorded as writes.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            writes: Vec::new(),
        }
    }

    /// Returns the current value under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// Returns a snapshot of all `(key, value)` pairs written, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.clone()
    }
}

impl DurableStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes.push((key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DomainError> {
        self.values.remove(key);
        Ok(())
    }
}

/// A store that always returns an infrastructure error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingStore;

impl DurableStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }
}
