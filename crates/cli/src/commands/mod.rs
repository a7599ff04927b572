// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers

pub mod edit;
pub mod exec;
pub mod ls;
pub mod op;
pub mod show;

use anyhow::Result;
use cb_adapters::{
    DisabledRegistry, HttpRegistry, ProcessHelpRunner, RegistryAdapter, TracedHelpRunner,
    TracedRegistry,
};
use cb_engine::{ResolveEvent, Resolver};
use cb_storage::{DefinitionStore, SessionStore};

use crate::config::RegistrySettings;
use crate::output::OutputFormat;

/// Resolver wired to the real registry (or its disabled stand-in) and
/// real child processes.
pub type CliResolver = Resolver<Box<dyn RegistryAdapter>, TracedHelpRunner<ProcessHelpRunner>>;

/// Everything a handler needs, built once in `main`.
pub struct Context {
    pub store: DefinitionStore,
    pub sessions: SessionStore,
    pub registry: RegistrySettings,
    pub format: OutputFormat,
}

impl Context {
    pub fn resolver(&self) -> Result<CliResolver> {
        let registry: Box<dyn RegistryAdapter> = if self.registry.enabled {
            let http = HttpRegistry::new(self.registry.config.clone())?;
            Box::new(TracedRegistry::new(http))
        } else {
            Box::new(TracedRegistry::new(DisabledRegistry))
        };
        Ok(Resolver::new(
            self.store.clone(),
            registry,
            TracedHelpRunner::new(ProcessHelpRunner),
        ))
    }

    pub fn view(&self) -> View {
        View {
            format: self.format,
            width: crate::output::terminal_width(),
            colorize: crate::color::should_colorize(),
        }
    }
}

/// How listings are presented.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub format: OutputFormat,
    pub width: usize,
    pub colorize: bool,
}

/// User-facing progress line for a resolution stage.
pub fn status_line(event: ResolveEvent, name: &str) -> String {
    match event {
        ResolveEvent::LocalMiss => {
            format!("Definition for '{name}' not found locally. Searching registry...")
        }
        ResolveEvent::Downloaded => "Downloaded definition from registry.".to_string(),
        ResolveEvent::RegistryInvalid => {
            "Registry definition is malformed. Attempting to scrape '--help'...".to_string()
        }
        ResolveEvent::RegistryMiss => {
            "Definition not found in registry. Attempting to scrape '--help'...".to_string()
        }
        ResolveEvent::Scraped => "Generated definition from help output.".to_string(),
    }
}

/// Write a status line to stderr. A failed write only costs the status
/// line, so it is logged rather than returned.
pub fn report(err: &mut impl std::io::Write, event: ResolveEvent, name: &str) {
    if let Err(e) = writeln!(err, "{}", status_line(event, name)) {
        tracing::debug!(error = %e, ?event, "status line not written");
    }
}

/// Print the command under construction, or `(empty)`.
pub fn print_command(out: &mut impl std::io::Write, session: &cb_storage::Session) -> Result<()> {
    if session.is_empty() {
        writeln!(out, "(empty)")?;
    } else {
        writeln!(out, "{}", session.command_line())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
