//! Service configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the compliance ledger service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Organization id allowed to create records
    pub trusted_org: String,
    /// Risk score used when the supplied value cannot be parsed
    pub default_risk_score: i64,
}

impl ServiceConfig {
    /// Create a config trusting the given organization.
    pub fn for_org(trusted_org: &str) -> Self {
        Self {
            trusted_org: trusted_org.to_string(),
            ..Default::default()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            trusted_org: "Org1MSP".to_string(),
            default_risk_score: crate::classify::DEFAULT_RISK_SCORE,
        }
    }
}
