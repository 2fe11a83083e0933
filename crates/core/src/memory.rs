//! In-memory world state.
//!
//! Backs the test suites and the dispatcher when no database is configured.
//! Range scans work on a snapshot taken when the cursor is opened.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::world_state::{key_in_range, StateEntry, StateIterator, StoreError, WorldState};

/// Ordered key/value map implementing [`WorldState`].
#[derive(Debug, Default)]
pub struct MemoryWorldState {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    open_cursors: Arc<AtomicUsize>,
}

impl MemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of range cursors opened and not yet released.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }

    /// All stored keys in ascending order.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Vec<u8>>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::backend("world state lock poisoned"))
    }
}

#[async_trait]
impl WorldState for MemoryWorldState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_owned(), value);
        Ok(())
    }

    async fn del_state(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn state_by_range<'a>(
        &'a self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, StoreError> {
        let snapshot: Vec<StateEntry> = self
            .lock()?
            .iter()
            .filter(|(key, _)| key_in_range(key, start_key, end_key))
            .map(|(key, value)| StateEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        self.open_cursors.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryStateIterator {
            entries: snapshot.into_iter(),
            open_cursors: Some(Arc::clone(&self.open_cursors)),
        }))
    }
}

/// Cursor over a snapshot of [`MemoryWorldState`] entries.
#[derive(Debug)]
pub struct MemoryStateIterator {
    entries: std::vec::IntoIter<StateEntry>,
    /// `None` once released.
    open_cursors: Option<Arc<AtomicUsize>>,
}

impl MemoryStateIterator {
    fn release(&mut self) {
        if let Some(counter) = self.open_cursors.take() {
            counter.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl StateIterator for MemoryStateIterator {
    async fn next_entry(&mut self) -> Result<Option<StateEntry>, StoreError> {
        if self.open_cursors.is_none() {
            return Err(StoreError::backend("range cursor already closed"));
        }
        Ok(self.entries.next())
    }

    async fn close(&mut self) -> Result<(), StoreError> {
        self.release();
        Ok(())
    }
}

impl Drop for MemoryStateIterator {
    fn drop(&mut self) {
        self.release();
    }
}
