// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk layout of the command-builder state root.
//!
//! Every component receives a [`Layout`] at construction instead of deriving
//! paths on its own, so tests can point the whole tool at a temp directory.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env;

/// Directory name under the user's config home.
pub const APP_DIR: &str = "command-builder";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot locate home directory; set CB_CONFIG_DIR")]
    NoHomeDir,
}

/// Paths used by the tool, all under one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the root: CB_CONFIG_DIR > XDG_CONFIG_HOME/command-builder > ~/.config/command-builder
    pub fn resolve() -> Result<Self, LayoutError> {
        if let Some(dir) = env::config_dir() {
            return Ok(Self::new(dir));
        }
        if let Some(xdg) = env::xdg_config_home() {
            return Ok(Self::new(xdg.join(APP_DIR)));
        }
        let home = dirs::home_dir().ok_or(LayoutError::NoHomeDir)?;
        Ok(Self::new(home.join(".config").join(APP_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// One `<name>.yaml` document per root command.
    pub fn definitions_dir(&self) -> PathBuf {
        self.root.join("definitions")
    }

    /// The command under construction.
    pub fn state_path(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("cb.log")
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
