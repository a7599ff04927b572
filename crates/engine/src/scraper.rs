// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build a definition by running `<name> --help`.
//!
//! The root help text supplies flags and subcommands. Each subcommand's own
//! help is then run once to fill in its flags; deeper levels are not
//! explored and per-subcommand failures are skipped.

use cb_adapters::HelpRunner;
use cb_core::{definition_from_help, parse_help_text, CommandDefinition};
use cb_storage::DefinitionStore;

use crate::error::ScrapeError;

/// Flag passed to ask a program for its usage text.
pub const HELP_FLAG: &str = "--help";

pub struct Scraper<H> {
    runner: H,
    store: DefinitionStore,
}

impl<H: HelpRunner> Scraper<H> {
    pub fn new(runner: H, store: DefinitionStore) -> Self {
        Self { runner, store }
    }

    /// Scrape `name` and save the result to the store.
    pub fn scrape(&self, name: &str) -> Result<CommandDefinition, ScrapeError> {
        let text = self.runner.run_help(name, &[HELP_FLAG])?;
        let mut def = definition_from_help(name, &text);
        tracing::debug!(
            name,
            flags = def.flags.len(),
            subcommands = def.subcommands.len(),
            "parsed root help"
        );

        for sub in &mut def.subcommands {
            match self.runner.run_help(name, &[sub.name.as_str(), HELP_FLAG]) {
                Ok(text) => sub.flags = parse_help_text(&text).flags,
                Err(e) => tracing::debug!(
                    name,
                    subcommand = sub.name.as_str(),
                    error = %e,
                    "skipping subcommand help"
                ),
            }
        }

        self.store.save(&def)?;
        Ok(def)
    }
}

#[cfg(test)]
#[path = "scraper_tests.rs"]
mod tests;
