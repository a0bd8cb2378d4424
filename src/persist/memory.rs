//! Shared in-memory key-value store.

use std::sync::{Arc, Mutex};

use hashbrown::HashMap;

use super::{KvSink, KvSource, PersistError, PersistResult};

/// In-memory store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KvSource for MemoryKvStore {
    fn load(&self, key: &str) -> PersistResult<Option<Vec<u8>>> {
        let map = self
            .inner
            .lock()
            .map_err(|_| PersistError::Message("memory store poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }
}

impl KvSink for MemoryKvStore {
    fn save(&mut self, key: &str, payload: &[u8]) -> PersistResult<()> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| PersistError::Message("memory store poisoned".to_string()))?;
        map.insert(key.to_string(), payload.to_vec());
        Ok(())
    }
}
