//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use domain_audit::initialization::init_logger_with;
use domain_audit::render::render_report;
use domain_audit::{run_audit, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let report = run_audit(&opt.domain).await?;

    // The classification is informational output: a dead_or_misconfigured
    // domain still exits successfully once the report is printed.
    let rendered = render_report(&report, opt.output)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
