use clap::{Parser, ValueEnum};

// Network operation timeouts
/// DNS query timeout in seconds.
/// Each record-type query makes a single attempt bounded by this timeout;
/// there is no retry or backoff.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Report output format.
///
/// - `Text`: Human-readable report (default)
/// - `Json`: The full report structure as pretty-printed JSON
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// domain_audit example.com
///
/// # Machine-readable report
/// domain_audit example.com --output json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_audit",
    about = "Audits a domain's DNS records and reports whether it is alive."
)]
pub struct Opt {
    /// Domain name to audit (e.g., example.com)
    #[arg(value_parser)]
    pub domain: String,

    /// Log level: error|warn|info|debug|trace
    ///
    /// Defaults to warn so log output stays out of the printed report.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
