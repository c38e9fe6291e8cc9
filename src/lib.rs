//! # compledger - Compliance Audit-Log Ledger Core
//!
//! Records immutable, tamper-evident compliance events over a pluggable
//! key-value ledger:
//! - deterministic integrity hash per record (SHA3-256 fingerprint)
//! - risk-based validation status (`Verified`/`NeedsReview`/`Rejected`/`Reviewed`)
//! - read, query, aggregation, and export over the full record history
//!
//! Storage and caller authentication are external collaborators injected
//! through the [`Ledger`](ledger::Ledger) and
//! [`IdentityProvider`](identity::IdentityProvider) traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use compledger::config::ServiceConfig;
//! use compledger::identity::StaticIdentity;
//! use compledger::ledger::MemoryLedger;
//! use compledger::record::NewLogRecord;
//! use compledger::service::ComplianceLedgerService;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = ComplianceLedgerService::new(
//!         Arc::new(MemoryLedger::new()),
//!         Arc::new(StaticIdentity::new("Org1MSP")),
//!         ServiceConfig::default(),
//!     );
//!
//!     let record = service
//!         .add_log(
//!             NewLogRecord::new("LOG-1", "User login success", "alice")
//!                 .with_severity("low")
//!                 .with_timestamp("2024-01-01T00:00:00Z")
//!                 .with_risk_score("10"),
//!         )
//!         .await
//!         .unwrap();
//!     println!("stored {} with hash {}", record.log_id, record.hash);
//! }
//! ```

pub mod classify;
pub mod config;
pub mod core;
pub mod identity;
pub mod integrity;
pub mod ledger;
pub mod logging;
pub mod record;
pub mod service;
pub mod simulate;

pub use crate::core::error::{Error, Result};
pub use record::{ComplianceLogRecord, ValidationStatus};
pub use service::ComplianceLedgerService;
