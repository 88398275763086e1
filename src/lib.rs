//! domain_audit library: DNS audit core
//!
//! This library queries a domain's DNS records across seven record types
//! (A, AAAA, MX, TXT, NS, CNAME, SOA), aggregates the results into a single
//! [`AuditReport`], and classifies the domain as alive or dead/misconfigured.
//!
//! # Example
//!
//! ```no_run
//! use domain_audit::run_audit;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_audit("example.com").await?;
//! println!("{} is {}", report.domain, report.status.as_str());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod audit;
pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
mod models;
pub mod render;

// Re-export public API
pub use audit::audit;
pub use config::{LogFormat, LogLevel, Opt, OutputFormat};
pub use dns::{lookup_records, HickoryResolve, Resolve};
pub use error_handling::InitializationError;
pub use models::{AuditReport, DomainStatus, RecordKind};
pub use run::run_audit;

// Internal run module (contains the library entry point)
mod run {
    use anyhow::{Context, Result};
    use log::debug;

    use crate::dns::HickoryResolve;
    use crate::initialization::init_resolver;
    use crate::models::AuditReport;

    /// Audits a domain using the system-configured DNS resolver.
    ///
    /// This is the main entry point for the library. It initializes the
    /// resolver, issues one query per supported record type, and returns the
    /// completed report. Resolution failures never surface here: they are
    /// observable only as empty per-type entries and, when A, AAAA, and MX
    /// are all empty, a dead classification.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain name to audit
    ///
    /// # Errors
    ///
    /// Returns an error only if the DNS resolver cannot be initialized.
    pub async fn run_audit(domain: &str) -> Result<AuditReport> {
        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
        let resolver = HickoryResolve::new(resolver);

        let start = std::time::Instant::now();
        let report = crate::audit::audit(domain, &resolver).await;
        debug!(
            "Audited {domain} in {:.1}s",
            start.elapsed().as_secs_f64()
        );

        Ok(report)
    }
}
