// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cb ls`: what can follow the current command.
//!
//! With an empty session this lists the cached definitions instead.

use std::io::Write;

use anyhow::Result;
use cb_adapters::{HelpRunner, RegistryAdapter};
use cb_core::{context_path, find_similar, format_suggestion, resolve_path};
use cb_engine::Resolver;
use cb_storage::Session;
use serde::Serialize;

use super::{report, Context, View};
use crate::listing::Listing;
use crate::output::OutputFormat;

#[derive(Serialize)]
struct LsJson<'a> {
    command: String,
    context: Vec<String>,
    #[serde(flatten)]
    listing: &'a Listing,
}

pub fn handle(ctx: &Context, session: &Session, out: &mut impl Write) -> Result<()> {
    let resolver = ctx.resolver()?;
    run(
        session,
        &resolver,
        ctx.view(),
        out,
        &mut std::io::stderr(),
    )
}

pub fn run<R: RegistryAdapter, H: HelpRunner>(
    session: &Session,
    resolver: &Resolver<R, H>,
    view: View,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let Some(root) = session.root() else {
        return list_cached(resolver, view, out);
    };

    let resolved = resolver.resolve_with(root, |event| report(err, event, root));
    let def = match resolved {
        Ok(resolved) => resolved.definition,
        Err(e) => {
            tracing::warn!(error = ?e, "ls without definition");
            writeln!(out, "No definition found for '{root}'.")?;
            return Ok(());
        }
    };

    let path = context_path(session.path());
    let (node, context) = match resolve_path(&def, path) {
        Ok(node) => (node, path.to_vec()),
        Err(unresolved) => {
            // Stay at the root; the unmatched token may be a positional value.
            let similar = find_similar(&unresolved.token, unresolved.candidates.as_slice());
            let hint = format_suggestion(&similar);
            writeln!(err, "note: {unresolved}, showing '{root}'{hint}")?;
            (&def, Vec::new())
        }
    };

    let listing = Listing::for_node(node);
    match view.format {
        OutputFormat::Text => {
            if listing.is_empty() {
                writeln!(out, "No further options or subcommands available.")?;
            } else {
                listing.render(out, view.width, view.colorize)?;
            }
        }
        OutputFormat::Json => {
            let json = LsJson {
                command: session.command_line(),
                context,
                listing: &listing,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

fn list_cached<R: RegistryAdapter, H: HelpRunner>(
    resolver: &Resolver<R, H>,
    view: View,
    out: &mut impl Write,
) -> Result<()> {
    let names = resolver.store().list();
    if view.format == OutputFormat::Json {
        let names = names?;
        let json = serde_json::json!({ "definitions": names });
        writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        return Ok(());
    }

    writeln!(out, "Available commands (definitions found):")?;
    match names {
        Ok(names) if names.is_empty() => writeln!(out, "  (none found in local cache)")?,
        Ok(names) => {
            for name in names {
                writeln!(out, "  {name}")?;
            }
        }
        Err(e) => writeln!(out, "  Error listing definitions: {e}")?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "ls_tests.rs"]
mod tests;
