// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cb op`: options available at the current command.

use std::io::Write;

use anyhow::Result;
use cb_adapters::{HelpRunner, RegistryAdapter};
use cb_core::{context_path, find_node};
use cb_engine::Resolver;
use cb_storage::Session;

use super::{report, Context, View};
use crate::listing::{option_entries, render_rows};
use crate::output::OutputFormat;

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
        writeln!(out, "No command context.")?;
        return Ok(());
    };

    let resolved = resolver.resolve_with(root, |event| report(err, event, root));
    let Ok(resolved) = resolved else {
        writeln!(out, "No definition found for '{root}'.")?;
        return Ok(());
    };

    let Some(node) = find_node(&resolved.definition, context_path(session.path())) else {
        writeln!(out, "Current context not found in definition.")?;
        return Ok(());
    };

    let options = option_entries(node);
    match view.format {
        OutputFormat::Text if options.is_empty() => writeln!(out, "No options available.")?,
        OutputFormat::Text => render_rows(out, &options, view.width, view.colorize)?,
        OutputFormat::Json => {
            let json = serde_json::json!({ "options": options });
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
