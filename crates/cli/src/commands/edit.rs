// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session mutations: `add`/`cd`, `back`/`..`, `clear`
//!
//! Each handler saves the session and then prints the resulting command.

use std::io::Write;

use anyhow::{Context as _, Result};
use cb_storage::{Session, SessionStore};

use super::print_command;

/// Append `tokens`. Hyphen-leading tokens are kept as typed.
pub fn add(
    sessions: &SessionStore,
    session: &mut Session,
    tokens: Vec<String>,
    out: &mut impl Write,
) -> Result<()> {
    if tokens.is_empty() {
        writeln!(out, "Usage: cb add <subcommand> [args...]")?;
        return Ok(());
    }
    tracing::debug!(?tokens, "appending tokens");
    session.append(tokens);
    save(sessions, session)?;
    print_command(out, session)
}

/// Drop the last token. An empty session is left as is.
pub fn back(sessions: &SessionStore, session: &mut Session, out: &mut impl Write) -> Result<()> {
    if let Some(token) = session.back() {
        tracing::debug!(token = token.as_str(), "dropped token");
        save(sessions, session)?;
    }
    print_command(out, session)
}

pub fn clear(sessions: &SessionStore, session: &mut Session, out: &mut impl Write) -> Result<()> {
    session.clear();
    save(sessions, session)?;
    print_command(out, session)
}

fn save(sessions: &SessionStore, session: &Session) -> Result<()> {
    sessions
        .save(session)
        .with_context(|| format!("failed to save session to {}", sessions.path().display()))
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
