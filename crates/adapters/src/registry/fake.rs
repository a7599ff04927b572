// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake registry adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RegistryAdapter, RegistryError};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Default)]
struct FakeRegistryState {
    documents: HashMap<String, Vec<u8>>,
    unavailable: HashSet<String>,
    calls: Vec<String>,
}

/// In-memory registry. Unknown names answer `NotFound`.
#[derive(Clone, Default)]
pub struct FakeRegistry {
    inner: Arc<Mutex<FakeRegistryState>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `name`.
    pub fn with_document(self, name: &str, body: impl Into<Vec<u8>>) -> Self {
        self.inner
            .lock()
            .documents
            .insert(name.to_string(), body.into());
        self
    }

    /// Answer `Unavailable` for `name`, as if the network were down.
    pub fn with_unavailable(self, name: &str) -> Self {
        self.inner.lock().unavailable.insert(name.to_string());
        self
    }

    /// Names requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().calls.clone()
    }
}

impl RegistryAdapter for FakeRegistry {
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, RegistryError> {
        let mut inner = self.inner.lock();
        inner.calls.push(name.to_string());
        if inner.unavailable.contains(name) {
            return Err(RegistryError::unavailable(name, "fake outage"));
        }
        inner
            .documents
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
