//! Logging setup for the plugin binary.
//!
//! stdout carries the `protoc` response, so every log line goes to stderr.

use anyhow::{Context, Result};
use protomcp_core::cli::LogFormat;
use std::io;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PROTOC_GEN_MCP_LOG";

/// Filter used when nothing else is configured.
pub const DEFAULT_FILTER: &str = "warn";

/// Picks the log filter.
///
/// Precedence: `--verbose`, then the `log_level` plugin parameter, then
/// [`LOG_ENV`], then [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns an error if the configured directive does not parse.
pub fn env_filter(verbose: bool, configured: Option<&str>) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }
    if let Some(directive) = configured {
        return EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log_level '{directive}'"));
    }
    Ok(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init(format: LogFormat, filter: EnvFilter) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    };
    installed.context("failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins() {
        let filter = env_filter(true, Some("error")).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "debug");
    }

    #[test]
    fn test_configured_directive() {
        let filter = env_filter(false, Some("protomcp_codegen=trace")).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "protomcp_codegen=trace");
    }

    #[test]
    fn test_invalid_directive() {
        assert!(env_filter(false, Some("protomcp_codegen=loud")).is_err());
    }
}
