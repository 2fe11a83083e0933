//! The world-state collaborator the registry reads and writes.
//!
//! Implementations own persistence and range iteration. The registry only
//! needs point reads, writes, deletes and an ordered, closable range scan.

use async_trait::async_trait;

/// Failure reported by a world-state backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Source(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// One key/value pair produced by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// Cursor over the entries of a range scan, ascending by key.
///
/// Callers must [`close`](StateIterator::close) the cursor once they are done
/// with it, whether or not it was exhausted. Dropping an unclosed cursor also
/// releases it.
#[async_trait]
pub trait StateIterator: Send {
    /// Next entry, or `None` once the range is exhausted.
    async fn next_entry(&mut self) -> Result<Option<StateEntry>, StoreError>;

    /// Release the cursor. Closing twice is a no-op.
    async fn close(&mut self) -> Result<(), StoreError>;
}

/// Key-addressed world-state store.
#[async_trait]
pub trait WorldState: Send + Sync {
    /// Value stored at `key`, or `None` when the key is absent.
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` at `key`, replacing any previous value.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Erase `key`.
    async fn del_state(&self, key: &str) -> Result<(), StoreError>;

    /// Open a cursor over keys in `[start_key, end_key)`. An empty bound is
    /// open, so `("", "")` scans the whole namespace.
    async fn state_by_range<'a>(
        &'a self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, StoreError>;
}

/// Whether `key` falls inside the half-open range `[start_key, end_key)`.
pub fn key_in_range(key: &str, start_key: &str, end_key: &str) -> bool {
    (start_key.is_empty() || key >= start_key) && (end_key.is_empty() || key < end_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_cover_everything() {
        assert!(key_in_range("", "", ""));
        assert!(key_in_range("zzz", "", ""));
    }

    #[test]
    fn start_is_inclusive_and_end_is_exclusive() {
        assert!(key_in_range("b", "b", "d"));
        assert!(key_in_range("c", "b", "d"));
        assert!(!key_in_range("d", "b", "d"));
        assert!(!key_in_range("a", "b", "d"));
    }
}
