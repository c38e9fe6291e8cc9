//! Record integrity hashing.
//!
//! Deterministic SHA3-256 fingerprint over the identifying fields of a
//! record. Not a MAC: no secret key is involved, so it detects accidental
//! corruption or field tampering, not forgery by a party who can recompute
//! the digest.

use crate::core::Hash256;
use sha3::{Digest, Sha3_256};

/// Compute the digest over the four identifying fields in fixed order.
///
/// Same inputs always yield the same digest; the hex form is lowercase.
pub fn record_digest(log_id: &str, message: &str, user: &str, timestamp: &str) -> Hash256 {
    let mut hasher = Sha3_256::new();
    hasher.update(log_id.as_bytes());
    hasher.update(message.as_bytes());
    hasher.update(user.as_bytes());
    hasher.update(timestamp.as_bytes());

    let digest = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    Hash256::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let a = record_digest("LOG-1", "msg", "alice", "2024-01-01");
        let b = record_digest("LOG-1", "msg", "alice", "2024-01-01");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_sensitive_to_each_field() {
        let base = record_digest("LOG-1", "msg", "alice", "2024-01-01");

        assert_ne!(base, record_digest("LOG-2", "msg", "alice", "2024-01-01"));
        assert_ne!(base, record_digest("LOG-1", "msG", "alice", "2024-01-01"));
        assert_ne!(base, record_digest("LOG-1", "msg", "alicf", "2024-01-01"));
        assert_ne!(base, record_digest("LOG-1", "msg", "alice", "2024-01-02"));
    }

    #[test]
    fn test_digest_hex_form() {
        let digest = record_digest("LOG-1", "msg", "alice", "2024-01-01");
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, hex.to_lowercase());
    }
}
