// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File logging. The terminal belongs to the listing, so logs go to
//! `<root>/cb.log`.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Default filter when `CB_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log path: {0}")]
    InvalidPath(String),
    #[error("failed to create log directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn setup_logging(log_path: &Path) -> Result<WorkerGuard, LoggingError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let invalid = || LoggingError::InvalidPath(log_path.display().to_string());
    let dir = log_path.parent().ok_or_else(invalid)?;
    let file_name = log_path.file_name().ok_or_else(invalid)?;
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = crate::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}
