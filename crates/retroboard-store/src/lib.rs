//! `DurableStore` adapters.
//!
//! `MemoryStore` lives as long as the process and stands in for browser
//! session storage. `FileStore` keeps the same key space in a JSON file so
//! that state survives a restart of the host.

pub mod file_store;
pub mod memory_store;
