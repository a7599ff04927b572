// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::time::Duration;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

// --- Registry ---

pub fn registry_url() -> Option<String> {
    non_empty("CB_REGISTRY_URL")
}

pub fn registry_timeout_ms() -> Option<Duration> {
    non_empty("CB_REGISTRY_TIMEOUT_MS")
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

pub fn registry_disabled() -> bool {
    std::env::var("CB_REGISTRY_DISABLED").is_ok_and(|v| v == "1")
}

// --- Logging ---

/// Filter directive for the log file, e.g. `debug` or `cb_engine=trace`.
pub fn log_filter() -> Option<String> {
    non_empty("CB_LOG")
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
