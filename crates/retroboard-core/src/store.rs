//! Durable key-value store abstraction.
//!
//! Client state that must survive a full unload/reload cycle is written to a
//! string-keyed, string-valued store scoped to the browser session. Adapters
//! live in infrastructure crates; this crate only defines the port.

use crate::error::DomainError;

/// Port for a string-keyed, string-valued durable store.
pub trait DurableStore: Send {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), DomainError>;
}
