// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional `config.toml` with environment overrides.
//!
//! ```toml
//! [registry]
//! url = "https://example.com/definitions"
//! timeout_secs = 10
//! enabled = true
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cb_adapters::RegistryConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry: RegistrySection,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySection {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub enabled: bool,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: None,
            enabled: true,
        }
    }
}

/// Effective registry settings after file and environment are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySettings {
    pub enabled: bool,
    pub config: RegistryConfig,
}

impl Config {
    /// Load `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Registry settings with `CB_REGISTRY_*` overrides applied.
    pub fn registry_settings(&self) -> RegistrySettings {
        let mut config = RegistryConfig::default();
        if let Some(url) = &self.registry.url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.registry.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(url) = crate::env::registry_url() {
            config.base_url = url;
        }
        if let Some(timeout) = crate::env::registry_timeout_ms() {
            config.timeout = timeout;
        }
        RegistrySettings {
            enabled: self.registry.enabled && !crate::env::registry_disabled(),
            config,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
