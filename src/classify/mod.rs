//! Risk classification.
//!
//! Two pieces: the status derivation applied to every record at creation,
//! and the keyword classifier used by the ingestion path to tag messages
//! with a framework and risk score.

pub mod rules;
pub mod status;

pub use rules::{Classification, ClassifierRule, MessageClassifier};
pub use status::{determine_status, parse_risk_score, parse_risk_score_or, DEFAULT_RISK_SCORE};
