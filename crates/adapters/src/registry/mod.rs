// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote definition registry adapters

mod disabled;
mod http;

pub use disabled::DisabledRegistry;
pub use http::{HttpRegistry, RegistryConfig, DEFAULT_REGISTRY_TIMEOUT, DEFAULT_REGISTRY_URL};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRegistry;

use thiserror::Error;

/// Errors from registry lookups
///
/// `NotFound` is the registry's explicit "no such document" answer; every
/// other failure is `Unavailable`. Callers treat both as a miss, but the
/// distinction is kept for diagnostics.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("definition for '{0}' not found in registry")]
    NotFound(String),
    #[error("registry unavailable for '{name}': {reason}")]
    Unavailable { name: String, reason: String },
    #[error("failed to initialize HTTP client: {0}")]
    Client(String),
}

impl RegistryError {
    pub fn unavailable(name: &str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Read-only catalog of authored definitions, keyed by root command name.
pub trait RegistryAdapter {
    /// Fetch the raw document body for `name`.
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, RegistryError>;
}

impl<R: RegistryAdapter + ?Sized> RegistryAdapter for Box<R> {
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, RegistryError> {
        (**self).fetch_document(name)
    }
}
