//! Validation status derivation.
//!
//! Pure mapping from (framework, severity, risk score) to a validation
//! status, first match wins.

use crate::core::{Error, Result};
use crate::record::ValidationStatus;

/// Sentinel used when a risk score cannot be parsed.
///
/// Lands in NeedsReview unless severity escalates the record, which keeps
/// malformed input from slipping through as low-risk.
pub const DEFAULT_RISK_SCORE: i64 = 50;

/// Derive a validation status from severity and risk score.
///
/// `framework` is currently unused: it is reserved for per-framework
/// thresholds and kept in the signature so callers already supply it.
/// Severity comparison is case-insensitive.
pub fn determine_status(_framework: &str, severity: &str, risk_score: i64) -> ValidationStatus {
    let severity = severity.to_lowercase();
    if risk_score >= 90 || severity == "critical" {
        ValidationStatus::Rejected
    } else if risk_score >= 50 || severity == "high" {
        ValidationStatus::NeedsReview
    } else {
        ValidationStatus::Verified
    }
}

/// Parse a risk score, falling back to [`DEFAULT_RISK_SCORE`] on
/// malformed input.
pub fn parse_risk_score(input: &str) -> i64 {
    parse_risk_score_or(input, DEFAULT_RISK_SCORE)
}

/// Parse a risk score with an explicit fallback for malformed input.
pub fn parse_risk_score_or(input: &str, default: i64) -> i64 {
    input.trim().parse().unwrap_or(default)
}

/// Strict risk-score parsing for callers that reject malformed input
/// instead of defaulting.
pub fn parse_risk_score_strict(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("unparseable risk score: {input}")))
}
