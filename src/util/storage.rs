//! Key-value storage collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persistence only ever needs `get` and `set` on string keys. The browser
//! build backs this with `localStorage`; when that is unavailable (private
//! mode, disabled storage) the board runs on an in-memory store instead and
//! simply does not survive a reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors from a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be used at all.
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key-value store.
pub trait KeyValueStore {
    /// Read `key`. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
    unavailable: bool,
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every read and write.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.inner.borrow_mut().unavailable = true;
        store
    }

    /// Seed `key` without counting it as a write.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Current value of `key`, bypassing availability.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "csr")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl LocalStorage {
    /// Open `localStorage`, or `None` when the browser refuses it.
    #[must_use]
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Store used by the running app: `localStorage` when available, otherwise
/// an in-memory store.
#[must_use]
pub fn open_browser_store() -> Box<dyn KeyValueStore> {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = LocalStorage::open() {
            return Box::new(storage);
        }
        log::warn!("localStorage unavailable; board changes will not survive a reload");
    }
    Box::new(MemoryStore::new())
}
