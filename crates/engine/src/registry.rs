// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry client: download a document and cache it.

use cb_adapters::RegistryAdapter;
use cb_storage::DefinitionStore;

use crate::error::FetchError;

/// Downloads definitions through a [`RegistryAdapter`] into the store.
pub struct RegistryClient<R> {
    adapter: R,
    store: DefinitionStore,
}

impl<R: RegistryAdapter> RegistryClient<R> {
    pub fn new(adapter: R, store: DefinitionStore) -> Self {
        Self { adapter, store }
    }

    /// Fetch the document for `name` and write it to the store verbatim.
    ///
    /// The body is not validated here; a malformed document is cached and
    /// fails on the next `load`.
    pub fn fetch(&self, name: &str) -> Result<(), FetchError> {
        let body = self.adapter.fetch_document(name)?;
        self.store.save_raw(name, &body)?;
        tracing::debug!(name, bytes = body.len(), "cached registry document");
        Ok(())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
