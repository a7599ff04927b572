// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help-text runner adapters

mod process;

pub use process::ProcessHelpRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeHelpRunner;

use thiserror::Error;

/// Errors from running a command to capture its help text
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("'{command}' was terminated by a signal")]
    Terminated { command: String },
    #[error("'{command}' exited with status {code} and printed nothing")]
    NoOutput { command: String, code: i32 },
}

/// Runs a program and returns everything it printed.
pub trait HelpRunner {
    /// Run `program` with `args`, returning stdout followed by stderr.
    fn run_help(&self, program: &str, args: &[&str]) -> Result<String, HelpError>;
}

impl<H: HelpRunner + ?Sized> HelpRunner for Box<H> {
    fn run_help(&self, program: &str, args: &[&str]) -> Result<String, HelpError> {
        (**self).run_help(program, args)
    }
}

/// Render an invocation for messages and fake lookup keys.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
