// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local cache of command definitions.
//!
//! One YAML document per root command, stored as `<key>.yaml` in the
//! definitions directory. Documents are read and replaced wholesale; there is
//! no merging and no partial-success load.
//!
//! The key is the percent-encoded name, so roots typed as paths
//! (`./mytool`, `bin/build.sh`) map to one file inside the directory.
//! Plain names such as `git` or `docker-compose.v2` are stored unchanged.

use cb_core::CommandDefinition;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::atomic::write_atomic;

/// File extension of stored documents.
pub const DEFINITION_EXT: &str = "yaml";

/// Errors from definition store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no cached definition for '{0}'")]
    NotFound(String),
    #[error("cached definition for '{name}' is malformed: {source}")]
    Parse {
        name: String,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize definition for '{name}': {source}")]
    Serialize {
        name: String,
        source: serde_yaml::Error,
    },
    #[error("invalid command name '{0}'")]
    InvalidName(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed store keyed by root command name.
#[derive(Debug, Clone)]
pub struct DefinitionStore {
    dir: PathBuf,
}

impl DefinitionStore {
    /// Open the store, creating the directory hierarchy if absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the document for `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{}.{DEFINITION_EXT}", file_key(name))))
    }

    /// Load and parse the definition for `name`.
    pub fn load(&self, name: &str) -> Result<CommandDefinition, StoreError> {
        let path = self.path_for(name)?;
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let def = serde_yaml::from_slice(&data).map_err(|source| StoreError::Parse {
            name: name.to_string(),
            source,
        })?;
        debug!(name, path = %path.display(), "loaded cached definition");
        Ok(def)
    }

    /// Names of all cached definitions, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(DEFINITION_EXT))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                urlencoding::decode(stem).ok().map(|name| name.into_owned())
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Serialize and store `def`, replacing any existing document for its name.
    pub fn save(&self, def: &CommandDefinition) -> Result<(), StoreError> {
        let yaml = serde_yaml::to_string(def).map_err(|source| StoreError::Serialize {
            name: def.name.clone(),
            source,
        })?;
        self.save_raw(&def.name, yaml.as_bytes())
    }

    /// Store an opaque document body for `name` verbatim.
    ///
    /// The body is not validated; a malformed body becomes a stored entry
    /// that fails to load later.
    pub fn save_raw(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        write_atomic(&path, contents)?;
        debug!(name, path = %path.display(), bytes = contents.len(), "stored definition");
        Ok(())
    }
}

/// Only names no command could have are refused.
fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() || name.contains('\0') {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// File stem for `name`: never a path, `.` or `..`.
fn file_key(name: &str) -> String {
    match name {
        "." | ".." => name.replace('.', "%2E"),
        _ => urlencoding::encode(name).into_owned(),
    }
}

#[cfg(test)]
#[path = "definitions_tests.rs"]
mod tests;
