//! Compliance ledger service.
//!
//! Orchestrates authorization, hashing, and classification over the
//! injected ledger collaborator. The service holds no record state of its
//! own; everything persistent lives behind the [`Ledger`] trait.

pub mod export;
pub mod stats;

pub use export::ExportFormat;
pub use stats::LedgerStats;

use crate::classify::{determine_status, parse_risk_score_or, MessageClassifier};
use crate::config::ServiceConfig;
use crate::core::{Error, Result};
use crate::identity::{AuthorizationGate, IdentityProvider};
use crate::integrity::record_digest;
use crate::ledger::Ledger;
use crate::record::{ComplianceLogRecord, NewLogRecord, ValidationStatus};
use std::sync::Arc;
use tracing::{debug, warn};

/// Record lifecycle service over an abstract key-value ledger.
pub struct ComplianceLedgerService {
    ledger: Arc<dyn Ledger>,
    identity: Arc<dyn IdentityProvider>,
    gate: AuthorizationGate,
    classifier: MessageClassifier,
    default_risk_score: i64,
}

impl ComplianceLedgerService {
    /// Create a service over the given collaborators.
    pub fn new(
        ledger: Arc<dyn Ledger>,
        identity: Arc<dyn IdentityProvider>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            ledger,
            identity,
            gate: AuthorizationGate::new(&config.trusted_org),
            classifier: MessageClassifier::with_defaults(),
            default_risk_score: config.default_risk_score,
        }
    }

    /// Create a record.
    ///
    /// Authorization is checked first; only the trusted organization may
    /// write. Fails with `AlreadyExists` if the log id is taken. The
    /// integrity hash and validation status are computed here and stored
    /// with the record.
    pub async fn add_log(&self, new: NewLogRecord) -> Result<ComplianceLogRecord> {
        self.gate.authorize(&self.identity.org_id()?)?;

        if self.ledger.get(&new.log_id).await?.is_some() {
            return Err(Error::AlreadyExists(new.log_id));
        }

        let hash = record_digest(&new.log_id, &new.message, &new.user, &new.timestamp);
        let risk_score = parse_risk_score_or(&new.risk_score, self.default_risk_score);
        let validated = determine_status(&new.framework, &new.severity, risk_score);

        let record = ComplianceLogRecord {
            log_id: new.log_id,
            message: new.message,
            timestamp: new.timestamp,
            user: new.user,
            access_role: new.access_role,
            source: new.source,
            severity: new.severity,
            framework: new.framework,
            risk_score,
            validated,
            hash: hash.to_hex(),
        };

        self.ledger
            .put(&record.log_id, &record.to_json()?)
            .await?;

        debug!(log_id = %record.log_id, status = %record.validated, "log record created");
        Ok(record)
    }

    /// Classify and create a record in one step.
    ///
    /// The ingestion path: generates a log id, stamps the current time,
    /// derives framework and risk score from the message keywords, then
    /// goes through [`add_log`](Self::add_log) like any other create.
    pub async fn ingest(
        &self,
        message: &str,
        user: &str,
        access_role: &str,
        source: &str,
        severity: &str,
    ) -> Result<ComplianceLogRecord> {
        let classification = self.classifier.classify(message);

        let new = NewLogRecord::new(&uuid::Uuid::new_v4().to_string(), message, user)
            .with_access_role(access_role)
            .with_source(source)
            .with_severity(severity)
            .with_framework(&classification.framework)
            .with_timestamp(&crate::core::now().to_rfc3339())
            .with_risk_score(&classification.risk_score.to_string());

        self.add_log(new).await
    }

    /// Read a record by log id.
    pub async fn read_log(&self, log_id: &str) -> Result<ComplianceLogRecord> {
        let bytes = self
            .ledger
            .get(log_id)
            .await?
            .ok_or_else(|| Error::NotFound(log_id.to_string()))?;

        ComplianceLogRecord::from_json(&bytes)
    }

    /// Permanently remove a record.
    ///
    /// The ledger's history mechanism independently retains whatever it
    /// retains; no tombstone is written here.
    pub async fn delete_log(&self, log_id: &str) -> Result<()> {
        if self.ledger.get(log_id).await?.is_none() {
            return Err(Error::NotFound(log_id.to_string()));
        }
        self.ledger.delete(log_id).await?;
        debug!(log_id, "log record deleted");
        Ok(())
    }

    /// All records in key order.
    ///
    /// Malformed stored entries are skipped; each skip emits a warning
    /// with the offending key so corruption stays observable.
    pub async fn all_logs(&self) -> Result<Vec<ComplianceLogRecord>> {
        let entries = self.ledger.range_scan("", "").await?;
        let mut records = Vec::with_capacity(entries.len());

        for (key, bytes) in entries {
            match ComplianceLogRecord::from_json(&bytes) {
                Ok(record) => records.push(record),
                Err(err) => warn!(key = %key, %err, "skipping malformed stored record"),
            }
        }

        Ok(records)
    }

    /// Records whose user matches case-insensitively.
    ///
    /// Comparison folds full Unicode case, not just ASCII.
    pub async fn logs_by_user(&self, user: &str) -> Result<Vec<ComplianceLogRecord>> {
        let records = self.all_logs().await?;
        let wanted = user.to_lowercase();
        Ok(records
            .into_iter()
            .filter(|r| r.user.to_lowercase() == wanted)
            .collect())
    }

    /// Raw stored values for a key, oldest first.
    ///
    /// Historical entries are reported exactly as the ledger holds them,
    /// not deserialized or validated.
    pub async fn log_history(&self, log_id: &str) -> Result<Vec<String>> {
        let history = self.ledger.history(log_id).await?;
        Ok(history
            .into_iter()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .collect())
    }

    /// Force a record's status to `Reviewed`.
    ///
    /// Unconditional: any prior status, including `Rejected`, transitions,
    /// and repeated calls succeed. Read-modify-write with no version
    /// token, so concurrent reviewers resolve last-writer-wins under the
    /// ledger's per-key serialization.
    pub async fn mark_reviewed(&self, log_id: &str) -> Result<ComplianceLogRecord> {
        let mut record = self.read_log(log_id).await?;
        record.validated = ValidationStatus::Reviewed;
        self.ledger.put(log_id, &record.to_json()?).await?;

        debug!(log_id, "log record marked reviewed");
        Ok(record)
    }

    /// Check a record's integrity against supplied field values.
    ///
    /// Recomputes the digest over the stored log id and the supplied
    /// message/user/timestamp, and reports whether it matches the stored
    /// hash. A mismatch means tampering or a data-entry error on one of
    /// the four fields. No state is mutated.
    pub async fn verify_integrity(
        &self,
        log_id: &str,
        message: &str,
        user: &str,
        timestamp: &str,
    ) -> Result<bool> {
        let record = self.read_log(log_id).await?;
        let expected = record_digest(&record.log_id, message, user, timestamp);
        Ok(record.hash == expected.to_hex())
    }

    /// Aggregate counts over the full ledger.
    pub async fn stats(&self) -> Result<LedgerStats> {
        let records = self.all_logs().await?;
        Ok(LedgerStats::from_records(&records))
    }

    /// Serialize the full record set for offline audit.
    pub async fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let records = self.all_logs().await?;
        export::export_records(&records, format)
    }
}
