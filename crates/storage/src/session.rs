// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command under construction.
//!
//! A session is a flat list of tokens persisted as JSON between invocations.
//! The first token is the root command; the rest is the path within its
//! definition.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::atomic::write_atomic;

/// Errors from session persistence
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tokens typed so far, e.g. `["git", "commit", "-m"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub command_parts: Vec<String>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.command_parts.is_empty()
    }

    /// The root command name, if any.
    pub fn root(&self) -> Option<&str> {
        self.command_parts.first().map(String::as_str)
    }

    /// Tokens after the root command.
    pub fn path(&self) -> &[String] {
        self.command_parts.get(1..).unwrap_or_default()
    }

    pub fn append<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_parts
            .extend(tokens.into_iter().map(Into::into));
    }

    /// Drop the last token, returning it.
    pub fn back(&mut self) -> Option<String> {
        self.command_parts.pop()
    }

    pub fn clear(&mut self) {
        self.command_parts.clear();
    }

    /// The tokens joined with single spaces.
    pub fn command_line(&self) -> String {
        self.command_parts.join(" ")
    }
}

/// File-backed session persistence.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session. A missing file is an empty session.
    ///
    /// A corrupt file is moved aside to `.bak` and an empty session is
    /// returned, so a bad write never wedges the tool.
    pub fn load(&self) -> Result<Session, SessionError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Session::default()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&data) {
            Ok(session) => Ok(session),
            Err(e) => {
                let bak_path = self.path.with_extension("bak");
                warn!(
                    error = %e,
                    path = %self.path.display(),
                    bak = %bak_path.display(),
                    "Corrupt session, moving to .bak and starting fresh",
                );
                fs::rename(&self.path, &bak_path)?;
                Ok(Session::default())
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let data = serde_json::to_vec_pretty(session)?;
        write_atomic(&self.path, &data)?;
        Ok(())
    }

    /// Reset the persisted session to empty.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.save(&Session::default())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
