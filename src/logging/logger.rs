// file: src/logging/logger.rs
// version: 2.0.0
// guid: e4a6c8d0-2f3b-4e5d-8b7c-9f1d3b5f7a9c

//! Logger initialization and configuration
//!
//! Logs go to stderr so that stdout carries nothing but hammer's own output.

use crate::error::{DispatchError, Result};
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter for the given verbosity; `RUST_LOG` wins when set
fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| DispatchError::config(format!("Failed to initialize logger: {}", e)))
}

/// Initialize structured JSON logging (for CI log collectors)
pub fn init_json_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| DispatchError::config(format!("Failed to initialize JSON logger: {}", e)))
}

/// Run a future inside an `operation` span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    async move { f().await }.instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_reports_error() {
        // Only one global subscriber can exist per process; whichever test
        // gets there first wins, so the second call must fail cleanly.
        let first = init_logger(false, false);
        let second = init_json_logger(true, false);

        assert!(first.is_err() || second.is_err());
    }

    #[tokio::test]
    async fn test_with_async_operation_span() {
        let result = with_async_operation_span("environment list", || async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            "async_result"
        })
        .await;

        assert_eq!(result, "async_result");
    }
}
