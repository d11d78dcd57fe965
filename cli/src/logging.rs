#![deny(missing_docs)]

//! # Logging
//!
//! `tracing` subscriber setup. Output goes to stderr; `RUST_LOG` takes
//! precedence over the `-v` count.

use crate::error::{CliError, CliResult};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use wp_openapi_core::{Diagnostic, GenerationReport, Severity};

/// Maps the number of `-v` flags to a level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `CliError::General` when a global subscriber is already set.
pub fn init_logging(verbosity: u8) -> CliResult<()> {
    let level = level_for_verbosity(verbosity);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::General(format!("Failed to initialize logging: {}", e)))
}

/// Emits one diagnostic at the matching level.
pub fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Info => tracing::debug!("{}", diagnostic),
        Severity::Warning => tracing::warn!("{}", diagnostic),
    }
}

/// Emits every diagnostic in `report`.
pub fn log_report(report: &GenerationReport) {
    for diagnostic in &report.diagnostics {
        log_diagnostic(diagnostic);
    }
    tracing::debug!(
        routes_seen = report.routes_seen,
        routes_translated = report.routes_translated,
        operations = report.operations,
        "route translation finished"
    );
}
