//! Offline audit exports.
//!
//! Serializes the full record set into one self-contained payload. JSON is
//! the canonical form; CSV and XML cover tooling that cannot ingest JSON.

use crate::core::Result;
use crate::record::ComplianceLogRecord;
use serde::{Deserialize, Serialize};

/// Export format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// JSON array of records
    Json,
    /// CSV with a header row
    Csv,
    /// XML document
    Xml,
}

/// Serialize records in the requested format.
pub fn export_records(records: &[ComplianceLogRecord], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec(records)?),
        ExportFormat::Csv => Ok(to_csv(records)),
        ExportFormat::Xml => Ok(to_xml(records)),
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(|c| c == ',' || c == '"' || c == '\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn to_csv(records: &[ComplianceLogRecord]) -> Vec<u8> {
    let mut output = String::new();
    output.push_str(
        "logID,message,timestamp,user,accessRole,source,severity,framework,riskScore,validated,hash\n",
    );

    for record in records {
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_escape(&record.log_id),
            csv_escape(&record.message),
            csv_escape(&record.timestamp),
            csv_escape(&record.user),
            csv_escape(&record.access_role),
            csv_escape(&record.source),
            csv_escape(&record.severity),
            csv_escape(&record.framework),
            record.risk_score,
            record.validated,
            record.hash
        ));
    }

    output.into_bytes()
}

fn xml_escape(field: &str) -> String {
    field
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn to_xml(records: &[ComplianceLogRecord]) -> Vec<u8> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str("<LogRecords>\n");

    for record in records {
        output.push_str("  <Record>\n");
        output.push_str(&format!("    <LogID>{}</LogID>\n", xml_escape(&record.log_id)));
        output.push_str(&format!(
            "    <Message>{}</Message>\n",
            xml_escape(&record.message)
        ));
        output.push_str(&format!(
            "    <Timestamp>{}</Timestamp>\n",
            xml_escape(&record.timestamp)
        ));
        output.push_str(&format!("    <User>{}</User>\n", xml_escape(&record.user)));
        output.push_str(&format!(
            "    <AccessRole>{}</AccessRole>\n",
            xml_escape(&record.access_role)
        ));
        output.push_str(&format!(
            "    <Source>{}</Source>\n",
            xml_escape(&record.source)
        ));
        output.push_str(&format!(
            "    <Severity>{}</Severity>\n",
            xml_escape(&record.severity)
        ));
        output.push_str(&format!(
            "    <Framework>{}</Framework>\n",
            xml_escape(&record.framework)
        ));
        output.push_str(&format!("    <RiskScore>{}</RiskScore>\n", record.risk_score));
        output.push_str(&format!("    <Validated>{}</Validated>\n", record.validated));
        output.push_str(&format!("    <Hash>{}</Hash>\n", record.hash));
        output.push_str("  </Record>\n");
    }

    output.push_str("</LogRecords>\n");
    output.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ValidationStatus;

    fn sample() -> Vec<ComplianceLogRecord> {
        vec![ComplianceLogRecord {
            log_id: "LOG-1".to_string(),
            message: "Firewall disabled, host down".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            user: "alice".to_string(),
            access_role: "admin".to_string(),
            source: "Firewall".to_string(),
            severity: "high".to_string(),
            framework: "NIST-CSF".to_string(),
            risk_score: 75,
            validated: ValidationStatus::NeedsReview,
            hash: "ab".repeat(32),
        }]
    }

    #[test]
    fn test_json_export_is_array() {
        let data = export_records(&sample(), ExportFormat::Json).unwrap();
        let parsed: Vec<ComplianceLogRecord> = serde_json::from_slice(&data).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].log_id, "LOG-1");
    }

    #[test]
    fn test_json_export_empty() {
        let data = export_records(&[], ExportFormat::Json).unwrap();
        assert_eq!(data, b"[]");
    }

    #[test]
    fn test_csv_export() {
        let data = export_records(&sample(), ExportFormat::Csv).unwrap();
        let csv = String::from_utf8(data).unwrap();

        assert!(csv.starts_with("logID,message,"));
        // Comma in the message gets quoted
        assert!(csv.contains("\"Firewall disabled, host down\""));
        assert!(csv.contains("NeedsReview"));
    }

    #[test]
    fn test_xml_export() {
        let data = export_records(&sample(), ExportFormat::Xml).unwrap();
        let xml = String::from_utf8(data).unwrap();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<LogID>LOG-1</LogID>"));
        assert!(xml.contains("<LogRecords>"));
    }

    #[test]
    fn test_xml_export_carries_all_fields() {
        let data = export_records(&sample(), ExportFormat::Xml).unwrap();
        let xml = String::from_utf8(data).unwrap();

        assert!(xml.contains("<AccessRole>admin</AccessRole>"));
        assert!(xml.contains("<Source>Firewall</Source>"));
        assert!(xml.contains("<RiskScore>75</RiskScore>"));
    }
}
