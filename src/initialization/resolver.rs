//! DNS resolver initialization.
//!
//! This module provides the function to initialize the DNS resolver with
//! proper timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::config::DNS_TIMEOUT_SECS;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for record lookups.
///
/// Creates a resolver from the system DNS configuration, falling back to the
/// library defaults when no system configuration can be read. Each query
/// makes a single attempt bounded by [`DNS_TIMEOUT_SECS`]; there are no
/// retries and no fallback servers beyond what the configuration provides.
///
/// # Returns
///
/// A configured `TokioResolver`, or an error if initialization fails.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if both system and
/// fallback configurations fail (though fallback should rarely fail).
pub fn init_resolver() -> Result<TokioResolver, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = 1; // Exactly one resolution attempt per query
    opts.ndots = 0; // Prevent search domain appending

    let builder = match TokioResolver::builder_tokio() {
        Ok(builder) => builder,
        Err(e) => {
            log::warn!("System DNS configuration unavailable ({e}); falling back to defaults");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        }
    };

    Ok(builder.with_options(opts).build())
}
