//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Chooses the log filter.
///
/// `--verbose` forces `debug`. Otherwise `RUST_LOG` wins when set and
/// valid, then the configured level.
pub fn filter(configured: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
}

/// Installs the global subscriber, writing to stderr.
///
/// Returns `false`, leaving the existing one in place, if a subscriber is
/// already installed.
pub fn init(configured: &str, verbose: bool) -> bool {
    match tracing_subscriber::fmt()
        .with_env_filter(filter(configured, verbose))
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "subscriber already installed");
            false
        }
    }
}
