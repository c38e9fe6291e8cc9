//! Ledger aggregation counts.

use crate::record::ComplianceLogRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label-to-count aggregation over the full ledger.
///
/// Keys: `total`, `severity_<lowercase severity>`, and
/// `framework_<lowercase framework, spaces as underscores>`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LedgerStats {
    counts: HashMap<String, u64>,
}

impl LedgerStats {
    /// Build stats from a record sequence.
    pub fn from_records(records: &[ComplianceLogRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }

    /// Count one record.
    pub fn record(&mut self, record: &ComplianceLogRecord) {
        *self.counts.entry("total".to_string()).or_default() += 1;

        let severity_key = format!("severity_{}", record.severity.to_lowercase());
        *self.counts.entry(severity_key).or_default() += 1;

        let framework_key = format!(
            "framework_{}",
            record.framework.to_lowercase().replace(' ', "_")
        );
        *self.counts.entry(framework_key).or_default() += 1;
    }

    /// Count for a label, zero if absent.
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total record count.
    pub fn total(&self) -> u64 {
        self.get("total")
    }

    /// The full label-to-count map.
    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ValidationStatus;

    fn record(severity: &str, framework: &str) -> ComplianceLogRecord {
        ComplianceLogRecord {
            log_id: "LOG-1".to_string(),
            message: String::new(),
            timestamp: String::new(),
            user: String::new(),
            access_role: String::new(),
            source: String::new(),
            severity: severity.to_string(),
            framework: framework.to_string(),
            risk_score: 0,
            validated: ValidationStatus::Verified,
            hash: String::new(),
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = LedgerStats::from_records(&[]);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.get("severity_low"), 0);
    }

    #[test]
    fn test_severity_counts() {
        let records = vec![
            record("critical", "GDPR"),
            record("high", "GDPR"),
            record("high", "HIPAA"),
        ];
        let stats = LedgerStats::from_records(&records);

        assert_eq!(stats.total(), 3);
        assert_eq!(stats.get("severity_critical"), 1);
        assert_eq!(stats.get("severity_high"), 2);
    }

    #[test]
    fn test_severity_keys_lowercased() {
        let stats = LedgerStats::from_records(&[record("Critical", "GDPR")]);
        assert_eq!(stats.get("severity_critical"), 1);
    }

    #[test]
    fn test_framework_keys_normalized() {
        let stats = LedgerStats::from_records(&[record("low", "PCI DSS")]);
        assert_eq!(stats.get("framework_pci_dss"), 1);
    }
}
