//! Tracing subscriber setup
//!
//! The terminal owns stdout and stderr while the form is open, so events are
//! written to a file through a non-blocking appender.

use crate::config::DEFAULT_LOG_FILTER;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name used inside the log directory
pub const LOG_FILE_NAME: &str = "registration-tui.log";

/// Parse a filter directive, falling back to [`DEFAULT_LOG_FILTER`] when it
/// does not parse. The second value explains a rejected directive.
pub fn resolve_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::new(DEFAULT_LOG_FILTER),
            Some(format!(
                "invalid log filter {directive:?} ({err}), using {DEFAULT_LOG_FILTER:?}"
            )),
        ),
    }
}

/// Non-blocking writer appending to `dir/file_name`.
///
/// Buffered lines are flushed when the returned guard is dropped.
pub fn file_writer(dir: &Path, file_name: &str) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Filtered plain-text subscriber over `writer`
pub fn file_subscriber(filter: EnvFilter, writer: NonBlocking) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
}

/// Install the global subscriber. Keep the guard alive until exit.
pub fn init(directive: &str, dir: &Path) -> Result<WorkerGuard> {
    let (filter, rejected) = resolve_filter(directive);
    let (writer, guard) = file_writer(dir, LOG_FILE_NAME)?;
    file_subscriber(filter, writer).init();

    if let Some(reason) = rejected {
        tracing::warn!("{reason}");
    }
    tracing::debug!(path = %dir.join(LOG_FILE_NAME).display(), "Logging initialized");
    Ok(guard)
}
