// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Three-tier definition resolution: local cache, registry, `--help` scrape.
//!
//! Tiers are tried in order, each at most once, and the first success wins.
//! Progress is reported through an observer so the caller decides how (and
//! whether) to show it.

use cb_adapters::{HelpRunner, RegistryAdapter};
use cb_core::CommandDefinition;
use cb_storage::{DefinitionStore, StoreError};

use crate::error::ResolveError;
use crate::registry::RegistryClient;
use crate::scraper::Scraper;

/// Stage transitions reported while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveEvent {
    /// The local cache had no usable document.
    LocalMiss,
    /// The registry returned a usable document and it was cached.
    Downloaded,
    /// The registry returned a document that does not parse.
    RegistryInvalid,
    /// The registry tier did not produce a usable definition.
    RegistryMiss,
    /// A definition was generated from help output.
    Scraped,
}

/// Which tier produced a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionSource {
    Cache,
    Registry,
    Scraped,
}

/// A resolved definition and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub definition: CommandDefinition,
    pub source: DefinitionSource,
}

pub struct Resolver<R, H> {
    store: DefinitionStore,
    registry: RegistryClient<R>,
    scraper: Scraper<H>,
}

impl<R: RegistryAdapter, H: HelpRunner> Resolver<R, H> {
    pub fn new(store: DefinitionStore, registry: R, runner: H) -> Self {
        Self {
            registry: RegistryClient::new(registry, store.clone()),
            scraper: Scraper::new(runner, store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &DefinitionStore {
        &self.store
    }

    pub fn resolve(&self, name: &str) -> Result<Resolved, ResolveError> {
        self.resolve_with(name, |_| {})
    }

    /// Resolve `name`, reporting each stage transition to `observer`.
    pub fn resolve_with(
        &self,
        name: &str,
        mut observer: impl FnMut(ResolveEvent),
    ) -> Result<Resolved, ResolveError> {
        let mut reasons = Vec::new();

        match self.store.load(name) {
            Ok(definition) => return Ok(resolved(definition, DefinitionSource::Cache)),
            // Empty or NUL-bearing names cannot name a command at all.
            Err(e @ StoreError::InvalidName(_)) => {
                return Err(unavailable(name, vec![e.to_string()]));
            }
            Err(e) => {
                tracing::debug!(name, error = %e, "cache miss");
                reasons.push(format!("cache: {e}"));
            }
        }
        observer(ResolveEvent::LocalMiss);

        let registry_event = match self.registry.fetch(name) {
            Ok(()) => match self.store.load(name) {
                Ok(definition) => {
                    observer(ResolveEvent::Downloaded);
                    tracing::info!(name, "resolved from registry");
                    return Ok(resolved(definition, DefinitionSource::Registry));
                }
                Err(e) => {
                    tracing::warn!(name, error = %e, "downloaded definition is unusable");
                    reasons.push(format!("registry: {e}"));
                    ResolveEvent::RegistryInvalid
                }
            },
            Err(e) => {
                reasons.push(format!("registry: {e}"));
                ResolveEvent::RegistryMiss
            }
        };
        observer(registry_event);

        match self.scraper.scrape(name) {
            Ok(definition) => {
                observer(ResolveEvent::Scraped);
                tracing::info!(name, "resolved from help output");
                Ok(resolved(definition, DefinitionSource::Scraped))
            }
            Err(e) => {
                reasons.push(format!("scrape: {e}"));
                tracing::warn!(name, ?reasons, "definition unavailable");
                Err(unavailable(name, reasons))
            }
        }
    }
}

fn resolved(definition: CommandDefinition, source: DefinitionSource) -> Resolved {
    Resolved { definition, source }
}

fn unavailable(name: &str, reasons: Vec<String>) -> ResolveError {
    ResolveError::DefinitionUnavailable {
        name: name.to_string(),
        reasons,
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
