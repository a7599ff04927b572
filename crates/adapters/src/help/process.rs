// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process help runner

use std::process::{Command, Stdio};

use super::{display_command, HelpError, HelpRunner};

/// Pager variables forced to `cat` so help output is never held by a pager.
const PAGER_VARS: [&str; 3] = ["PAGER", "MANPAGER", "GIT_PAGER"];

/// Runs the real executable found on `PATH`.
///
/// A non-zero exit is accepted as long as something was printed; plenty of
/// tools print their usage and then exit 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessHelpRunner;

impl HelpRunner for ProcessHelpRunner {
    fn run_help(&self, program: &str, args: &[&str]) -> Result<String, HelpError> {
        let command = display_command(program, args);
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        for var in PAGER_VARS {
            cmd.env(var, "cat");
        }

        let output = cmd.output().map_err(|source| HelpError::Spawn {
            command: command.clone(),
            source,
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        match output.status.code() {
            None => Err(HelpError::Terminated { command }),
            Some(code) if code != 0 && text.trim().is_empty() => {
                Err(HelpError::NoOutput { command, code })
            }
            Some(code) => {
                tracing::debug!(command, code, bytes = text.len(), "captured help output");
                Ok(text)
            }
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
