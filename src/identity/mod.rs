//! Caller identity and authorization.
//!
//! The authentication subsystem is an external collaborator; the core only
//! sees the caller's organization identifier and compares it for equality.

use crate::core::{Error, Result};

/// Yields the calling principal's organization identifier.
///
/// Opaque to the core beyond equality comparison.
pub trait IdentityProvider: Send + Sync {
    /// The caller's organization identifier.
    fn org_id(&self) -> Result<String>;
}

/// Identity provider with a fixed organization id.
#[derive(Clone, Debug)]
pub struct StaticIdentity {
    org: String,
}

impl StaticIdentity {
    /// Create an identity for the given organization.
    pub fn new(org: &str) -> Self {
        Self {
            org: org.to_string(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn org_id(&self) -> Result<String> {
        Ok(self.org.clone())
    }
}

/// Allow-list gate over a single trusted organization.
///
/// Applied to record creation only; reads are ungated.
#[derive(Clone, Debug)]
pub struct AuthorizationGate {
    trusted_org: String,
}

impl AuthorizationGate {
    /// Create a gate trusting exactly one organization id.
    pub fn new(trusted_org: &str) -> Self {
        Self {
            trusted_org: trusted_org.to_string(),
        }
    }

    /// Check a caller identity against the allow-list.
    ///
    /// No side effects; fails with `Unauthorized` on any mismatch.
    pub fn authorize(&self, caller: &str) -> Result<()> {
        if caller == self.trusted_org {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }
}
