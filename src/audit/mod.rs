//! Audit orchestration.
//!
//! Issues one query per supported record kind, assembles the per-kind
//! results into an [`AuditReport`], and derives the liveness classification.

use std::collections::BTreeMap;

use futures::future::join_all;
use log::info;
use strum::IntoEnumIterator;

use crate::dns::{lookup_records, Resolve};
use crate::models::{AuditReport, DomainStatus, RecordKind};

/// Audits a domain across all supported record kinds.
///
/// The seven queries share no state and are issued concurrently, each bounded
/// by the resolver's own timeout; per-query results are merged before
/// classification runs. Query failures surface only as empty per-kind
/// entries, so this function itself never fails.
///
/// # Arguments
///
/// * `domain` - The domain name to audit
/// * `resolver` - The resolution capability to query through
///
/// # Returns
///
/// The completed, immutable report. `records` holds an entry for every
/// [`RecordKind`], populated or empty.
pub async fn audit<R: Resolve + ?Sized>(domain: &str, resolver: &R) -> AuditReport {
    let lookups = join_all(RecordKind::iter().map(|kind| async move {
        (kind, lookup_records(resolver, domain, kind).await)
    }))
    .await;

    let records: BTreeMap<RecordKind, Vec<String>> = lookups.into_iter().collect();
    let status = DomainStatus::classify(&records);
    info!("Audit of {domain} complete: {}", status.as_str());

    AuditReport {
        domain: domain.to_string(),
        records,
        status,
    }
}
