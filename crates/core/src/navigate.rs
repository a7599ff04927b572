// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path resolution within a definition tree
//!
//! A path is the list of tokens typed after the root command name. Each token
//! is matched exactly (case-sensitive, first match) against the children of
//! the node reached so far. A single miss makes the whole path unresolvable:
//! there is no prefix matching, no fuzzy matching and no backtracking.

use crate::definition::Node;
use thiserror::Error;

/// Prefix that marks a token as a flag rather than a subcommand name.
pub const FLAG_PREFIX: char = '-';

/// A path token did not name any child of the node reached before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is not a subcommand of '{parent}'")]
pub struct PathUnresolved {
    /// The token that failed to match.
    pub token: String,
    /// Zero-based position of `token` within the path.
    pub depth: usize,
    /// Name of the node whose children were searched.
    pub parent: String,
    /// Names that were available at that position.
    pub candidates: Vec<String>,
}

/// Walk `path` from `root`, returning the node it addresses.
///
/// An empty path addresses `root` itself.
pub fn resolve_path<'a, S: AsRef<str>>(
    root: &'a Node,
    path: &[S],
) -> Result<&'a Node, PathUnresolved> {
    let mut current = root;
    for (depth, token) in path.iter().enumerate() {
        let token = token.as_ref();
        current = current
            .subcommand(token)
            .ok_or_else(|| PathUnresolved {
                token: token.to_string(),
                depth,
                parent: current.name.clone(),
                candidates: current
                    .subcommand_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })?;
    }
    Ok(current)
}

/// Locate the node addressed by `path`, or `None` if any token misses.
pub fn find_node<'a, S: AsRef<str>>(root: &'a Node, path: &[S]) -> Option<&'a Node> {
    resolve_path(root, path).ok()
}

/// True for tokens such as `-m` or `--verbose`.
pub fn is_flag_token(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// The portion of `path` that names the current context.
///
/// A trailing flag token is dropped, so a user who just typed a flag sees the
/// node that flag belongs to. Flags are never inspected for values, so a flag
/// followed by a value is not stripped.
pub fn context_path<S: AsRef<str>>(path: &[S]) -> &[S] {
    match path.split_last() {
        Some((last, rest)) if is_flag_token(last.as_ref()) => rest,
        _ => path,
    }
}

#[cfg(test)]
#[path = "navigate_tests.rs"]
mod tests;
