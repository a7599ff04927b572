// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP registry adapter
//!
//! Documents are plain files served at `<base-url>/<name>.yaml`. A 404 means
//! the registry has no document for that name; any other non-2xx status or
//! transport failure means the registry could not answer.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use super::{RegistryAdapter, RegistryError};

/// Public catalog of authored definitions.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/MatthewLarson/command-builder-definitions/main/definitions";

/// Upper bound on a single registry request.
pub const DEFAULT_REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how long to look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: DEFAULT_REGISTRY_TIMEOUT,
        }
    }
}

/// Blocking HTTP client for the definition registry.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    client: Client,
    base_url: String,
}

impl HttpRegistry {
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("cb/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RegistryError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the document for `name`. The name is percent-encoded, so a
    /// path-like root such as `./build.sh` stays a single path segment.
    pub fn document_url(&self, name: &str) -> String {
        format!("{}/{}.yaml", self.base_url, urlencoding::encode(name))
    }
}

impl RegistryAdapter for HttpRegistry {
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, RegistryError> {
        let url = self.document_url(name);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| RegistryError::unavailable(name, format!("failed to contact registry: {e}")))?;
        check_status(name, response.status())?;
        let body = response
            .bytes()
            .map_err(|e| RegistryError::unavailable(name, format!("failed to read response: {e}")))?;
        Ok(body.to_vec())
    }
}

/// Map a response status onto the registry's error contract.
pub(crate) fn check_status(name: &str, status: StatusCode) -> Result<(), RegistryError> {
    if status == StatusCode::NOT_FOUND {
        return Err(RegistryError::NotFound(name.to_string()));
    }
    if !status.is_success() {
        return Err(RegistryError::unavailable(
            name,
            format!("registry returned status: {}", status.as_u16()),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
