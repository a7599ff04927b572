// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake help runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{display_command, HelpError, HelpRunner};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct FakeHelpState {
    outputs: HashMap<String, String>,
    calls: Vec<String>,
}

/// Canned help output keyed by the full invocation, e.g. `"git remote --help"`.
///
/// Invocations without a canned output fail as if the program did not exist.
#[derive(Clone, Default)]
pub struct FakeHelpRunner {
    inner: Arc<Mutex<FakeHelpState>>,
}

impl FakeHelpRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `invocation` with `text`.
    pub fn with_output(self, invocation: &str, text: &str) -> Self {
        self.inner
            .lock()
            .outputs
            .insert(invocation.to_string(), text.to_string());
        self
    }

    /// Invocations seen so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().calls.clone()
    }
}

impl HelpRunner for FakeHelpRunner {
    fn run_help(&self, program: &str, args: &[&str]) -> Result<String, HelpError> {
        let command = display_command(program, args);
        let mut inner = self.inner.lock();
        inner.calls.push(command.clone());
        match inner.outputs.get(&command) {
            Some(text) => Ok(text.clone()),
            None => Err(HelpError::Spawn {
                command,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}
