//! Ledger trait definition.
//!
//! Abstraction over the durable key-value substrate. The core never talks
//! to storage directly; every operation goes through this trait, so any
//! linearizable store with per-key history retention can back the service.

use crate::core::Result;
use async_trait::async_trait;

/// Key-value ledger collaborator.
///
/// Implementations must serialize operations on the same key relative to
/// each other; the core performs no locking of its own.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Get the current value for a key.
    ///
    /// Returns None if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Put a value for a key, creating or overwriting it.
    async fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a key.
    ///
    /// Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Scan keys in `[start, end)` in lexicographic order.
    ///
    /// An empty `start` or `end` means unbounded on that side; two empty
    /// strings scan the whole ledger.
    async fn range_scan(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>>;

    /// All values ever written for a key, oldest first.
    ///
    /// History survives deletion of the current value.
    async fn history(&self, key: &str) -> Result<Vec<Vec<u8>>>;
}
