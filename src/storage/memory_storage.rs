use super::KeyValueStorage;
use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

/// In-process storage. Clones share the same map, so a handle kept by the
/// caller still sees what a store wrote after the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.writes)
    }

    /// Makes every subsequent `set` fail until switched back.
    pub fn fail_writes(&self, fail: bool) -> Result<(), StorageError> {
        self.lock()?.fail_writes = fail;
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        if inner.fail_writes {
            return Err(StorageError::Unavailable(format!("writes disabled for '{}'", key)));
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}
