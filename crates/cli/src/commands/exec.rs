// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cb exec`: hand the finished command to the calling shell.
//!
//! The command is only printed; a shell wrapper is expected to run it.

use std::io::Write;

use anyhow::{Context as _, Result};
use cb_storage::{Session, SessionStore};

pub fn handle(sessions: &SessionStore, session: &Session, out: &mut impl Write) -> Result<()> {
    if session.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", session.command_line())?;
    out.flush()?;
    tracing::info!(command = %session.command_line(), "handed off command");
    sessions.clear().context("failed to clear session")
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
