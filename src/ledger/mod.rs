//! Key-value ledger abstraction.
//!
//! The durable substrate is an external collaborator; the core only needs
//! get/put/delete, ordered range scans, and per-key history.

pub mod memory;
pub mod store;

pub use memory::MemoryLedger;
pub use store::Ledger;
