//! # Persistence Port
//!
//! The string-keyed key/value store the cart and wishlist write through.
//!
//! ## Why a Port?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Write-Through Persistence                            │
//! │                                                                         │
//! │  CartStore mutation ──► serialize mapping ──► Storage::save(key, json) │
//! │                                                      │                  │
//! │                     ┌────────────────────────────────┤                  │
//! │                     ▼                                ▼                  │
//! │              MemoryStorage                    FileStorage               │
//! │              (tests, ephemeral)               (one file per key)        │
//! │                                                                         │
//! │  The stores never know which backend they run on, so the join/total/   │
//! │  count logic tests without touching a file system.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are the fixed record names from [`crate::config`]; values are JSON
//! strings. Methods take `&self` so implementations use interior mutability
//! and can be shared behind `Arc` by a store and its surrounding session.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{StorageError, StoreResult};

// =============================================================================
// Storage Trait
// =============================================================================

/// A string-keyed key/value persistence interface with JSON string values.
pub trait Storage {
    /// Retrieves the record for `key`. Returns `Ok(None)` if absent.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Inserts or replaces the record for `key`.
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the record for `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Shared backends: a store and its session can hold the same storage.
impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a record, bypassing the trait. Used by tests to simulate
    /// whatever a previous session (or a corrupting actor) left behind.
    pub fn seed(&self, key: &str, value: &str) {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let records = self.records.lock().expect("storage mutex poisoned");
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut records = self.records.lock().expect("storage mutex poisoned");
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut records = self.records.lock().expect("storage mutex poisoned");
        records.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// Durable backend keeping one `<key>.json` file per record under a
/// directory, the desktop analogue of the browser's local storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (creating if needed) a storage directory.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(dir.display().to_string(), e))?;
        Ok(FileStorage { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::write(self.path_for(key), value).map_err(|e| StorageError::io(key, e))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
