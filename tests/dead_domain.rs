//! End-to-end audit of a nonexistent domain against the real resolver.
//!
//! `.invalid` is a reserved TLD, so the queries NXDOMAIN; with no network at
//! all they fault instead. Either way every failure collapses to an empty
//! entry, so these assertions hold in both environments.

use domain_audit::{run_audit, DomainStatus, RecordKind};
use strum::IntoEnumIterator;

const NONEXISTENT_DOMAIN: &str = "definitely-does-not-exist-12345.invalid";

#[tokio::test]
async fn test_nonexistent_domain_audit_is_dead_with_all_entries_present() {
    let report = run_audit(NONEXISTENT_DOMAIN)
        .await
        .expect("audit should only fail on resolver initialization");

    assert_eq!(report.domain, NONEXISTENT_DOMAIN);
    assert_eq!(report.status, DomainStatus::DeadOrMisconfigured);
    assert!(!report.is_alive());

    // All seven kinds are present as empty sequences, never missing keys
    assert_eq!(report.records.len(), 7);
    for kind in RecordKind::iter() {
        let records = report
            .records
            .get(&kind)
            .unwrap_or_else(|| panic!("missing entry for {}", kind.as_str()));
        assert!(
            records.is_empty(),
            "{} should have no records for a nonexistent domain",
            kind.as_str()
        );
    }
}
