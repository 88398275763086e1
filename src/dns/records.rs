//! Failure-collapsing record queries.

use log::debug;

use super::resolve::Resolve;
use crate::models::RecordKind;

/// Queries records of one kind for a domain, collapsing every failure mode
/// into an empty result.
///
/// NXDOMAIN, no answer for this kind, timeouts, unreachable name servers, and
/// any other resolution fault are all observable only as an empty vector;
/// this function never errors. The caller cannot distinguish the cases.
///
/// # Arguments
///
/// * `resolver` - The resolution capability to query through
/// * `domain` - The domain to query
/// * `kind` - The record kind to query
///
/// # Returns
///
/// The textual form of each returned record in name-server order, or an
/// empty vector on any failure.
pub async fn lookup_records<R: Resolve + ?Sized>(
    resolver: &R,
    domain: &str,
    kind: RecordKind,
) -> Vec<String> {
    match resolver.resolve(domain, kind).await {
        Ok(records) => {
            debug!(
                "Found {} {} record(s) for {domain}",
                records.len(),
                kind.as_str()
            );
            records
        }
        Err(e) => {
            debug!("{} lookup failed for {domain}: {e}", kind.as_str());
            Vec::new()
        }
    }
}
