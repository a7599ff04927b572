// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::help::{display_command, HelpError, HelpRunner};
use crate::registry::{RegistryAdapter, RegistryError};
use std::time::Instant;

/// Wrapper that adds tracing to any RegistryAdapter
#[derive(Clone)]
pub struct TracedRegistry<R> {
    inner: R,
}

impl<R> TracedRegistry<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: RegistryAdapter> RegistryAdapter for TracedRegistry<R> {
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, RegistryError> {
        tracing::info_span!("registry.fetch", name).in_scope(|| {
            tracing::debug!("fetching");
            let start = Instant::now();
            let result = self.inner.fetch_document(name);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(body) => tracing::info!(bytes = body.len(), elapsed_ms, "downloaded"),
                Err(e) if e.is_not_found() => tracing::info!(elapsed_ms, "not in registry"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "registry unavailable"),
            }
            result
        })
    }
}

/// Wrapper that adds tracing to any HelpRunner
#[derive(Clone)]
pub struct TracedHelpRunner<H> {
    inner: H,
}

impl<H> TracedHelpRunner<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: HelpRunner> HelpRunner for TracedHelpRunner<H> {
    fn run_help(&self, program: &str, args: &[&str]) -> Result<String, HelpError> {
        let command = display_command(program, args);
        tracing::info_span!("help.run", command = command.as_str()).in_scope(|| {
            let start = Instant::now();
            let result = self.inner.run_help(program, args);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(text) => tracing::info!(
                    lines = text.lines().count(),
                    elapsed_ms,
                    "help captured"
                ),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "help failed"),
            }
            result
        })
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
