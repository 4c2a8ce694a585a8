//! File-backed implementation of the `DurableStore` trait.
//!
//! All keys live in a single JSON object. The file is read once when the
//! store is opened and rewritten in full on every change.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use retroboard_core::error::DomainError;
use retroboard_core::store::DurableStore;
use tracing::debug;

/// Default file name used by [`FileStore::with_defaults`].
pub const DEFAULT_STORE_FILE: &str = ".onboarding_session.json";

/// JSON-file-backed store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing or empty file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read or
    /// does not contain a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                DomainError::Infrastructure(format!("failed to read {}: {e}", path.display()))
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    DomainError::Infrastructure(format!(
                        "failed to parse {}: {e}",
                        path.display()
                    ))
                })?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    /// Opens the store at `base_dir` joined with [`DEFAULT_STORE_FILE`].
    ///
    /// # Errors
    ///
    /// See [`FileStore::open`].
    pub fn with_defaults(base_dir: &Path) -> Result<Self, DomainError> {
        Self::open(base_dir.join(DEFAULT_STORE_FILE))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), DomainError> {
        let infra = |e: std::io::Error| {
            DomainError::Infrastructure(format!("failed to write {}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(infra)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| DomainError::Serialization(format!("failed to encode store: {e}")))?;

        let mut file = fs::File::create(&self.path).map_err(infra)?;
        file.write_all(json.as_bytes()).map_err(infra)?;
        file.sync_all().map_err(infra)
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), DomainError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
