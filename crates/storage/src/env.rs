// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the storage crate.

use std::path::PathBuf;

fn non_empty_path(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Explicit state root override.
pub fn config_dir() -> Option<PathBuf> {
    non_empty_path("CB_CONFIG_DIR")
}

pub fn xdg_config_home() -> Option<PathBuf> {
    non_empty_path("XDG_CONFIG_HOME")
}
