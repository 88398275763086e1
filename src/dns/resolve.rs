//! The resolution capability trait and its hickory-resolver adapter.

use anyhow::Result;
use async_trait::async_trait;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioResolver;

use crate::models::RecordKind;

/// Capability interface for a single DNS query.
///
/// Isolates the audit from any specific resolution mechanism's error
/// vocabulary: implementations surface faults as a plain error, and the
/// caller decides what a fault means. [`HickoryResolve`] is the one concrete
/// implementation; tests substitute fixed-response mocks.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Performs one resolution attempt for `(domain, kind)` and returns the
    /// textual form of each record in name-server order.
    async fn resolve(&self, domain: &str, kind: RecordKind) -> Result<Vec<String>>;
}

/// Adapter over a [`TokioResolver`].
///
/// The query timeout and single-attempt policy are carried by the wrapped
/// resolver's options (see [`crate::initialization::init_resolver`]).
pub struct HickoryResolve {
    resolver: TokioResolver,
}

impl HickoryResolve {
    /// Wraps a configured resolver.
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Resolve for HickoryResolve {
    async fn resolve(&self, domain: &str, kind: RecordKind) -> Result<Vec<String>> {
        let lookup = self.resolver.lookup(domain, kind.to_record_type()).await?;
        Ok(lookup.iter().filter_map(record_to_string).collect())
    }
}

/// Renders one record's data in its conventional presentation form.
///
/// Record data of types the audit does not ask about (e.g. RRSIG records in a
/// signed answer section) is skipped.
pub(super) fn record_to_string(rdata: &RData) -> Option<String> {
    match rdata {
        RData::A(ip) => Some(ip.to_string()),
        RData::AAAA(ip) => Some(ip.to_string()),
        RData::MX(mx) => Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8())),
        RData::TXT(txt) => {
            // TXT records can contain multiple character strings - join them
            Some(
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect::<Vec<String>>()
                    .join(""),
            )
        }
        RData::NS(ns) => Some(ns.to_utf8()),
        RData::CNAME(cname) => Some(cname.to_utf8()),
        RData::SOA(soa) => Some(format!(
            "{} {} {} {} {} {} {}",
            soa.mname().to_utf8(),
            soa.rname().to_utf8(),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum()
        )),
        _ => None,
    }
}
