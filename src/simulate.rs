//! Sample log generation.
//!
//! Random event records drawn from fixed pools, for demos and load tests.

use crate::record::NewLogRecord;
use rand::seq::SliceRandom;
use uuid::Uuid;

const MESSAGES: &[&str] = &[
    "User login success",
    "Firewall disabled on host 10.0.0.5",
    "Credit card info leaked",
    "Access to PII by unauthorized user",
    "Health record modified by guest",
    "Admin accessed security camera",
    "Medical data exported",
    "Root access granted to external IP",
];

const USERS: &[&str] = &["admin", "guest", "john.doe", "root"];
const SEVERITIES: &[&str] = &["low", "medium", "high", "critical"];
const SOURCES: &[&str] = &["SIEM", "Firewall", "Endpoint", "DLP"];

/// Generate one random log input with a fresh UUID log id.
///
/// Framework and risk score are left unset; the ingestion classifier is
/// expected to fill them in.
pub fn sample_log() -> NewLogRecord {
    let mut rng = rand::thread_rng();

    NewLogRecord::new(
        &Uuid::new_v4().to_string(),
        MESSAGES.choose(&mut rng).unwrap_or(&MESSAGES[0]),
        USERS.choose(&mut rng).unwrap_or(&USERS[0]),
    )
    .with_access_role("user")
    .with_source(SOURCES.choose(&mut rng).unwrap_or(&SOURCES[0]))
    .with_severity(SEVERITIES.choose(&mut rng).unwrap_or(&SEVERITIES[0]))
    .with_timestamp(&crate::core::now().to_rfc3339())
}

/// Generate a batch of random log inputs.
pub fn sample_logs(count: usize) -> Vec<NewLogRecord> {
    (0..count).map(|_| sample_log()).collect()
}
