// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for definition resolution

use cb_adapters::{HelpError, RegistryError};
use cb_storage::StoreError;
use thiserror::Error;

/// Errors from downloading a definition into the store
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("failed to store downloaded definition: {0}")]
    Store(#[from] StoreError),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Registry(e) if e.is_not_found())
    }
}

/// Errors from generating a definition out of `--help` output
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("help execution failed: {0}")]
    Execution(#[from] HelpError),
    #[error("failed to store generated definition: {0}")]
    Store(#[from] StoreError),
}

/// Errors from the resolution chain
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Every tier failed. `reasons` holds one message per attempted tier.
    #[error("no definition found for '{name}'")]
    DefinitionUnavailable { name: String, reasons: Vec<String> },
}
