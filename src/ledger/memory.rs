//! In-memory ledger implementation.
//!
//! Backs tests and embedded deployments. A BTreeMap keeps keys ordered for
//! range scans; a separate map accumulates per-key history, oldest first.

use crate::core::Result;
use crate::ledger::store::Ledger;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use tokio::sync::RwLock;

/// In-memory key-value ledger with history retention.
#[derive(Default)]
pub struct MemoryLedger {
    /// Current state, ordered by key
    state: RwLock<BTreeMap<String, Vec<u8>>>,
    /// Every value ever written per key, oldest first
    history: RwLock<HashMap<String, Vec<Vec<u8>>>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys.
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    /// Whether the ledger holds no live keys.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut state = self.state.write().await;
        let mut history = self.history.write().await;
        state.insert(key.to_string(), value.to_vec());
        history
            .entry(key.to_string())
            .or_default()
            .push(value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.state.write().await.remove(key);
        Ok(())
    }

    async fn range_scan(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>> {
        // BTreeMap::range panics on inverted bounds; an inverted interval
        // is just empty under the [start, end) contract.
        if !start.is_empty() && !end.is_empty() && start > end {
            return Ok(Vec::new());
        }

        let state = self.state.read().await;
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };

        Ok(state
            .range((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    async fn history(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        Ok(self
            .history
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let ledger = MemoryLedger::new();
        ledger.put("k1", b"v1").await.unwrap();

        let value = ledger.get("k1").await.unwrap();
        assert_eq!(value, Some(b"v1".to_vec()));
        assert_eq!(ledger.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete() {
        let ledger = MemoryLedger::new();
        ledger.put("k1", b"v1").await.unwrap();
        ledger.delete("k1").await.unwrap();

        assert_eq!(ledger.get("k1").await.unwrap(), None);
        assert!(ledger.is_empty().await);
    }

    #[tokio::test]
    async fn test_range_scan_full() {
        let ledger = MemoryLedger::new();
        ledger.put("b", b"2").await.unwrap();
        ledger.put("a", b"1").await.unwrap();
        ledger.put("c", b"3").await.unwrap();

        let all = ledger.range_scan("", "").await.unwrap();
        let keys: Vec<_> = all.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_range_scan_bounded() {
        let ledger = MemoryLedger::new();
        for key in ["a", "b", "c", "d"] {
            ledger.put(key, b"v").await.unwrap();
        }

        let range = ledger.range_scan("b", "d").await.unwrap();
        let keys: Vec<_> = range.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_range_scan_inverted_bounds_empty() {
        let ledger = MemoryLedger::new();
        for key in ["a", "b", "c"] {
            ledger.put(key, b"v").await.unwrap();
        }

        let range = ledger.range_scan("z", "a").await.unwrap();
        assert!(range.is_empty());

        // Equal bounds are an empty half-open interval, not an error
        let range = ledger.range_scan("b", "b").await.unwrap();
        assert!(range.is_empty());
    }

    #[tokio::test]
    async fn test_history_oldest_first() {
        let ledger = MemoryLedger::new();
        ledger.put("k1", b"v1").await.unwrap();
        ledger.put("k1", b"v2").await.unwrap();
        ledger.put("k1", b"v3").await.unwrap();

        let history = ledger.history("k1").await.unwrap();
        assert_eq!(history, vec![b"v1".to_vec(), b"v2".to_vec(), b"v3".to_vec()]);
    }

    #[tokio::test]
    async fn test_history_survives_delete() {
        let ledger = MemoryLedger::new();
        ledger.put("k1", b"v1").await.unwrap();
        ledger.delete("k1").await.unwrap();

        assert_eq!(ledger.get("k1").await.unwrap(), None);
        assert_eq!(ledger.history("k1").await.unwrap(), vec![b"v1".to_vec()]);
    }
}
