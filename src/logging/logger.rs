// file: src/logging/logger.rs
// version: 1.0.0
// guid: 3f7b1e59-c2a6-4d80-95f3-e816b04a7d29

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system once at startup
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::PrepError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_levels() {
        // The subscriber can only be installed once per process, so the
        // second call is expected to fail; both outcomes are exercised.
        let first = init_logger(false, false);
        let second = init_logger(true, false);
        assert!(first.is_ok() || second.is_err());
    }
}
