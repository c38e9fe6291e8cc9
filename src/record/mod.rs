//! Compliance log record structure.
//!
//! The single persisted entity. Stored payloads use the original chaincode's
//! camelCase field names so existing ledger contents remain readable.

use serde::{Deserialize, Serialize};

/// Compliance classification of a record.
///
/// Serialized forms match the stored strings exactly
/// (`Verified`/`NeedsReview`/`Rejected`/`Reviewed`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// Low risk, accepted as-is
    Verified,
    /// Elevated risk, pending human review
    NeedsReview,
    /// High risk, rejected by policy
    Rejected,
    /// Reviewed by a human, regardless of prior status
    Reviewed,
}

impl ValidationStatus {
    /// The stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Verified => "Verified",
            ValidationStatus::NeedsReview => "NeedsReview",
            ValidationStatus::Rejected => "Rejected",
            ValidationStatus::Reviewed => "Reviewed",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable, tamper-evident audit-log record.
///
/// All fields are write-once except `validated`, which the review
/// operation may transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplianceLogRecord {
    /// Globally unique log identifier, primary key
    #[serde(rename = "logID")]
    pub log_id: String,
    /// Event description
    pub message: String,
    /// Caller-supplied event time, not parsed by the core
    pub timestamp: String,
    /// Subject user of the event
    pub user: String,
    /// Role the user held at event time
    #[serde(rename = "accessRole")]
    pub access_role: String,
    /// Originating system (SIEM, firewall, ...)
    pub source: String,
    /// Event severity label
    pub severity: String,
    /// Compliance framework the event maps to
    pub framework: String,
    /// Risk score driving validation status
    #[serde(rename = "riskScore")]
    pub risk_score: i64,
    /// Current validation status
    pub validated: ValidationStatus,
    /// Lowercase hex digest over (logID, message, user, timestamp),
    /// computed at creation and never regenerated
    pub hash: String,
}

impl ComplianceLogRecord {
    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> crate::core::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from the stored JSON form.
    pub fn from_json(bytes: &[u8]) -> crate::core::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Input fields for creating a record.
///
/// The risk score arrives as a string from the transport layer; parsing
/// and defaulting happen at creation time.
#[derive(Clone, Debug, Default)]
pub struct NewLogRecord {
    /// Caller-supplied unique log identifier
    pub log_id: String,
    /// Event description
    pub message: String,
    /// Subject user
    pub user: String,
    /// Role the user held
    pub access_role: String,
    /// Originating system
    pub source: String,
    /// Severity label
    pub severity: String,
    /// Compliance framework label
    pub framework: String,
    /// Caller-supplied event time string
    pub timestamp: String,
    /// Unparsed risk score
    pub risk_score: String,
}

impl NewLogRecord {
    /// Create input with the required identifying fields.
    pub fn new(log_id: &str, message: &str, user: &str) -> Self {
        Self {
            log_id: log_id.to_string(),
            message: message.to_string(),
            user: user.to_string(),
            ..Default::default()
        }
    }

    /// Set the access role.
    pub fn with_access_role(mut self, access_role: &str) -> Self {
        self.access_role = access_role.to_string();
        self
    }

    /// Set the originating source.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Set the severity label.
    pub fn with_severity(mut self, severity: &str) -> Self {
        self.severity = severity.to_string();
        self
    }

    /// Set the compliance framework.
    pub fn with_framework(mut self, framework: &str) -> Self {
        self.framework = framework.to_string();
        self
    }

    /// Set the event timestamp string.
    pub fn with_timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    /// Set the unparsed risk score.
    pub fn with_risk_score(mut self, risk_score: &str) -> Self {
        self.risk_score = risk_score.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ComplianceLogRecord {
        ComplianceLogRecord {
            log_id: "LOG-1".to_string(),
            message: "User login success".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            user: "alice".to_string(),
            access_role: "user".to_string(),
            source: "SIEM".to_string(),
            severity: "low".to_string(),
            framework: "ISO27001".to_string(),
            risk_score: 10,
            validated: ValidationStatus::Verified,
            hash: "00".repeat(32),
        }
    }

    #[test]
    fn test_status_string_forms() {
        assert_eq!(ValidationStatus::Verified.as_str(), "Verified");
        assert_eq!(ValidationStatus::NeedsReview.as_str(), "NeedsReview");
        assert_eq!(ValidationStatus::Rejected.as_str(), "Rejected");
        assert_eq!(ValidationStatus::Reviewed.to_string(), "Reviewed");
    }

    #[test]
    fn test_json_roundtrip() {
        let record = sample_record();
        let bytes = record.to_json().unwrap();
        let parsed = ComplianceLogRecord::from_json(&bytes).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_json_uses_original_field_names() {
        let record = sample_record();
        let json = String::from_utf8(record.to_json().unwrap()).unwrap();
        assert!(json.contains("\"logID\""));
        assert!(json.contains("\"accessRole\""));
        assert!(json.contains("\"riskScore\""));
        assert!(json.contains("\"validated\":\"Verified\""));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(ComplianceLogRecord::from_json(b"not json").is_err());
    }

    #[test]
    fn test_new_log_record_builder() {
        let new = NewLogRecord::new("LOG-1", "msg", "alice")
            .with_severity("high")
            .with_framework("GDPR")
            .with_risk_score("85");

        assert_eq!(new.log_id, "LOG-1");
        assert_eq!(new.severity, "high");
        assert_eq!(new.framework, "GDPR");
        assert_eq!(new.risk_score, "85");
        assert!(new.source.is_empty());
    }
}
