//! Storage layer for the expense tracker
//!
//! The whole expense collection lives in one durable blob: a JSON array of
//! expense records. `BlobStore` abstracts where that blob lives so the store
//! can be backed by a file in production and by memory in tests.

pub mod file_io;
pub mod sample;

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

pub use file_io::{read_text, write_atomic, write_json_atomic};
pub use sample::generate_samples;

use crate::error::{ExpenseError, ExpenseResult};

/// A single named blob of durable state
pub trait BlobStore: Send + Sync {
    /// Read the blob, `None` if nothing has been stored yet
    fn read(&self) -> ExpenseResult<Option<String>>;

    /// Replace the blob contents; complete once this returns `Ok`
    fn write(&self, contents: &str) -> ExpenseResult<()>;

    /// Human-readable location for logs and error messages
    fn describe(&self) -> String;
}

/// Blob stored as a JSON file, replaced atomically on every write
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self) -> ExpenseResult<Option<String>> {
        read_text(&self.path)
    }

    fn write(&self, contents: &str) -> ExpenseResult<()> {
        write_atomic(&self.path, contents.as_bytes())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory blob; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    contents: Arc<RwLock<Option<String>>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut guard) = store.contents.write() {
            *guard = Some(contents.into());
        }
        store
    }

    /// Current contents, for inspection
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|guard| guard.clone())
    }

    /// Make subsequent writes fail, simulating an unwritable medium
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut guard) = self.fail_writes.write() {
            *guard = fail;
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self) -> ExpenseResult<Option<String>> {
        let guard = self.contents.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> ExpenseResult<()> {
        let fail = self
            .fail_writes
            .read()
            .map(|guard| *guard)
            .unwrap_or(false);
        if fail {
            return Err(ExpenseError::Storage("Blob is not writable".into()));
        }

        let mut guard = self.contents.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *guard = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_blob_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let blob = FileBlobStore::new(temp_dir.path().join("data").join("expenses.json"));

        assert_eq!(blob.read().unwrap(), None);

        blob.write("[]").unwrap();
        assert_eq!(blob.read().unwrap().as_deref(), Some("[]"));
        assert!(blob.describe().ends_with("expenses.json"));
    }

    #[test]
    fn test_memory_blob_clones_share_contents() {
        let blob = MemoryBlobStore::new();
        let view = blob.clone();

        blob.write("[1]").unwrap();
        assert_eq!(view.contents().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_memory_blob_write_failure() {
        let blob = MemoryBlobStore::with_contents("[]");
        blob.set_fail_writes(true);

        let err = blob.write("[1]").unwrap_err();
        assert!(err.is_storage());
        assert_eq!(blob.read().unwrap().as_deref(), Some("[]"));
    }
}
