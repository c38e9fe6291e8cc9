//! Keyword-based message classification.
//!
//! Maps a free-form event message to a compliance framework, a risk score,
//! and a suggested status. Used on the ingestion path before a record is
//! written; the authoritative status still comes from
//! [`determine_status`](super::status::determine_status).

use crate::record::ValidationStatus;

/// Result of classifying a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Matched compliance framework, or "Unknown"
    pub framework: String,
    /// Risk score assigned by the matched rule
    pub risk_score: i64,
    /// Status the rule suggests
    pub status: ValidationStatus,
}

/// A single keyword rule.
#[derive(Clone, Debug)]
pub struct ClassifierRule {
    /// Keywords, any of which triggers the rule
    pub keywords: &'static [&'static str],
    /// Framework assigned on match
    pub framework: &'static str,
    /// Risk score assigned on match
    pub risk_score: i64,
    /// Status assigned on match
    pub status: ValidationStatus,
}

impl ClassifierRule {
    fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|kw| message.contains(kw))
    }
}

/// Keyword classifier, first matching rule wins.
pub struct MessageClassifier {
    rules: Vec<ClassifierRule>,
}

impl MessageClassifier {
    /// Create an empty classifier.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a classifier with the default rule table.
    pub fn with_defaults() -> Self {
        use crate::record::ValidationStatus::{NeedsReview, Rejected, Verified};

        let rules = vec![
            ClassifierRule {
                keywords: &["credit card", "card data", "cvv", "expiration date"],
                framework: "PCI DSS",
                risk_score: 90,
                status: Rejected,
            },
            ClassifierRule {
                keywords: &["pii", "personal data", "name", "dob", "ssn", "aadhaar"],
                framework: "GDPR",
                risk_score: 85,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["health", "phi", "medical record", "patient"],
                framework: "HIPAA",
                risk_score: 95,
                status: Rejected,
            },
            ClassifierRule {
                keywords: &["firewall", "disabled", "turned off"],
                framework: "NIST-CSF",
                risk_score: 75,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["login", "unauthorized", "failed"],
                framework: "ISO27001",
                risk_score: 70,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["login", "success"],
                framework: "ISO27001",
                risk_score: 10,
                status: Verified,
            },
            ClassifierRule {
                keywords: &["data breach", "data leak"],
                framework: "GDPR",
                risk_score: 98,
                status: Rejected,
            },
            ClassifierRule {
                keywords: &["unpatched", "vulnerability", "exploit"],
                framework: "NIST-CSF",
                risk_score: 85,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["unauthorized access", "privilege escalation"],
                framework: "ISO27001",
                risk_score: 90,
                status: Rejected,
            },
            ClassifierRule {
                keywords: &["suspicious activity", "anomaly detected"],
                framework: "SOC2",
                risk_score: 65,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["configuration change", "misconfiguration"],
                framework: "ISO27001",
                risk_score: 60,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["network scan", "port scan"],
                framework: "NIST-CSF",
                risk_score: 55,
                status: NeedsReview,
            },
            ClassifierRule {
                keywords: &["malware", "ransomware", "trojan"],
                framework: "HIPAA",
                risk_score: 90,
                status: Rejected,
            },
            ClassifierRule {
                keywords: &["no encryption", "unencrypted", "plaintext password"],
                framework: "PCI DSS",
                risk_score: 95,
                status: Rejected,
            },
            ClassifierRule {
                keywords: &["audit log deleted", "log tampering"],
                framework: "SOX",
                risk_score: 99,
                status: Rejected,
            },
        ];

        Self { rules }
    }

    /// Add a rule at the end of the table.
    pub fn add_rule(&mut self, rule: ClassifierRule) {
        self.rules.push(rule);
    }

    /// Number of rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Classify a message, case-insensitive substring match.
    ///
    /// Unmatched messages fall back to ("Unknown", 50, NeedsReview).
    pub fn classify(&self, message: &str) -> Classification {
        let message = message.to_lowercase();

        for rule in &self.rules {
            if rule.matches(&message) {
                return Classification {
                    framework: rule.framework.to_string(),
                    risk_score: rule.risk_score,
                    status: rule.status,
                };
            }
        }

        Classification {
            framework: "Unknown".to_string(),
            risk_score: 50,
            status: ValidationStatus::NeedsReview,
        }
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}
