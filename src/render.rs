//! Report rendering.
//!
//! An explicit function of the [`AuditReport`] — the audit itself never
//! prints. Output is either a human-readable text form or the full report
//! structure as JSON.

use anyhow::{Context, Result};
use colored::*;
use strum::IntoEnumIterator;

use crate::config::OutputFormat;
use crate::models::{AuditReport, DomainStatus, RecordKind};

/// Renders a report in the requested output format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_report(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

fn render_text(report: &AuditReport) -> String {
    let mut out = String::new();

    let status = match report.status {
        DomainStatus::Alive => report.status.as_str().to_uppercase().green().bold(),
        DomainStatus::DeadOrMisconfigured => report.status.as_str().to_uppercase().red().bold(),
    };
    out.push_str(&format!("Domain: {}\n", report.domain.blue().bold()));
    out.push_str(&format!("Status: {status}\n"));

    if !report.is_alive() {
        out.push_str(&format!(
            "\n{}\n",
            "No critical DNS records found (A, AAAA, or MX).".red()
        ));
        return out;
    }

    out.push_str("\nDNS records found:\n");
    for kind in RecordKind::iter() {
        let Some(records) = report.records.get(&kind) else {
            continue;
        };
        if records.is_empty() {
            continue;
        }
        out.push_str(&format!("  {}:\n", kind.as_str().cyan()));
        for record in records {
            out.push_str(&format!("    {record}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::models::{AuditReport, DomainStatus, RecordKind};

    fn report_with(entries: &[(RecordKind, &[&str])]) -> AuditReport {
        let mut records: BTreeMap<RecordKind, Vec<String>> = RecordKind::iter()
            .map(|kind| (kind, Vec::new()))
            .collect();
        for (kind, values) in entries {
            records.insert(*kind, values.iter().map(|v| v.to_string()).collect());
        }
        let status = DomainStatus::classify(&records);
        AuditReport {
            domain: "example.com".to_string(),
            records,
            status,
        }
    }

    #[test]
    fn test_text_rendering_for_alive_domain() {
        colored::control::set_override(false);
        let report = report_with(&[
            (RecordKind::A, &["93.184.216.34"]),
            (RecordKind::Mx, &["10 mail.example.com."]),
        ]);

        let out = render_text(&report);
        assert!(out.contains("Domain: example.com"));
        assert!(out.contains("Status: ALIVE"));
        assert!(out.contains("A:"));
        assert!(out.contains("93.184.216.34"));
        assert!(out.contains("10 mail.example.com."));
        // Empty kinds are not listed
        assert!(!out.contains("SOA:"));
    }

    #[test]
    fn test_text_rendering_for_dead_domain() {
        colored::control::set_override(false);
        let report = report_with(&[(RecordKind::Ns, &["ns1.example.com."])]);

        let out = render_text(&report);
        assert!(out.contains("Status: DEAD OR MISCONFIGURED"));
        assert!(out.contains("No critical DNS records found (A, AAAA, or MX)."));
        // Dead reports short-circuit: no record listing, even for populated NS
        assert!(!out.contains("ns1.example.com."));
    }

    #[test]
    fn test_json_rendering_has_all_seven_kinds_and_status() {
        let report = report_with(&[(RecordKind::A, &["93.184.216.34"])]);

        let json = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["status"], "alive");
        let records = value["records"].as_object().unwrap();
        assert_eq!(records.len(), 7);
        for key in ["A", "AAAA", "MX", "TXT", "NS", "CNAME", "SOA"] {
            assert!(records.contains_key(key), "missing key {key}");
        }
        assert_eq!(records["A"][0], "93.184.216.34");
        assert!(records["MX"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_rendering_of_dead_domain() {
        let report = report_with(&[]);
        let json = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "dead_or_misconfigured");
    }
}
