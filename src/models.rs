//! Report data model: record kinds, classification, and the audit report.

use std::collections::BTreeMap;

use hickory_resolver::proto::rr::RecordType;
use serde::Serialize;
use strum_macros::EnumIter;

/// DNS record types queried during an audit, in the fixed audit order.
///
/// The declaration order is the order queries are issued and report fields
/// are populated: A, AAAA, MX, TXT, NS, CNAME, SOA. `Ord` follows declaration
/// order, so a `BTreeMap` keyed by `RecordKind` iterates in audit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Mail exchanger record.
    Mx,
    /// Text record.
    Txt,
    /// Nameserver record.
    Ns,
    /// Canonical name record.
    Cname,
    /// Start-of-authority record.
    Soa,
}

impl RecordKind {
    /// Returns the DNS mnemonic for this record kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::Aaaa => "AAAA",
            RecordKind::Mx => "MX",
            RecordKind::Txt => "TXT",
            RecordKind::Ns => "NS",
            RecordKind::Cname => "CNAME",
            RecordKind::Soa => "SOA",
        }
    }

    /// Maps this kind onto the resolver's wire-level record type.
    pub fn to_record_type(self) -> RecordType {
        match self {
            RecordKind::A => RecordType::A,
            RecordKind::Aaaa => RecordType::AAAA,
            RecordKind::Mx => RecordType::MX,
            RecordKind::Txt => RecordType::TXT,
            RecordKind::Ns => RecordType::NS,
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Soa => RecordType::SOA,
        }
    }
}

/// Liveness classification derived from the audited records.
///
/// Never set independently: always computed from the record map via
/// [`DomainStatus::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    /// At least one A, AAAA, or MX record was found.
    Alive,
    /// None of the A, AAAA, or MX queries returned records.
    DeadOrMisconfigured,
}

impl DomainStatus {
    /// Classifies a record map: alive iff at least one of the A, AAAA, or MX
    /// entries is non-empty. TXT/NS/CNAME/SOA contents never affect the result.
    pub fn classify(records: &BTreeMap<RecordKind, Vec<String>>) -> Self {
        let has_critical_record = [RecordKind::A, RecordKind::Aaaa, RecordKind::Mx]
            .iter()
            .any(|kind| records.get(kind).is_some_and(|r| !r.is_empty()));

        if has_critical_record {
            DomainStatus::Alive
        } else {
            DomainStatus::DeadOrMisconfigured
        }
    }

    /// Returns the human-readable form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Alive => "alive",
            DomainStatus::DeadOrMisconfigured => "dead or misconfigured",
        }
    }
}

/// Result of auditing a single domain.
///
/// Produced once per invocation by [`crate::audit`] and handed read-only to
/// the rendering layer. `records` always contains an entry (possibly empty)
/// for all seven supported record kinds; per-kind sequences preserve
/// name-server order with no dedup and no sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// The queried domain name, as provided by the caller.
    pub domain: String,
    /// Per-kind record texts, keyed in audit order.
    pub records: BTreeMap<RecordKind, Vec<String>>,
    /// Derived liveness classification.
    pub status: DomainStatus,
}

impl AuditReport {
    /// Returns true if the domain was classified [`DomainStatus::Alive`].
    pub fn is_alive(&self) -> bool {
        self.status == DomainStatus::Alive
    }
}
