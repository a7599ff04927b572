// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command definition tree
//!
//! A definition describes the grammar of one root command: its subcommands,
//! flags and positional arguments, nested to any depth. The root node is the
//! unit of persistence; every child is owned by exactly one parent.

use serde::{Deserialize, Serialize};

/// Flag type recorded when nothing better is known.
pub const DEFAULT_FLAG_TYPE: &str = "string";

fn default_flag_type() -> String {
    DEFAULT_FLAG_TYPE.to_string()
}

/// A named option, e.g. `--verbose`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Semantic hint only; never enforced.
    #[serde(rename = "type", default = "default_flag_type")]
    pub kind: String,
}

impl Flag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: default_flag_type(),
        }
    }
}

/// A positional argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

/// A point in the grammar tree.
///
/// Called a subcommand when nested and a command definition at the root.
/// Absent collections deserialize as empty; empty collections are omitted
/// when serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Argument>,
}

/// The root of a definition tree.
pub type CommandDefinition = Node;

/// A nested node.
pub type Subcommand = Node;

impl Node {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// First immediate child whose name equals `name` exactly.
    pub fn subcommand(&self, name: &str) -> Option<&Node> {
        self.subcommands.iter().find(|sub| sub.name == name)
    }

    /// Mutable variant of [`Node::subcommand`].
    pub fn subcommand_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.subcommands.iter_mut().find(|sub| sub.name == name)
    }

    /// Names of the immediate children, in definition order.
    pub fn subcommand_names(&self) -> Vec<&str> {
        self.subcommands.iter().map(|sub| sub.name.as_str()).collect()
    }

    /// True when nothing can follow this node.
    pub fn is_leaf(&self) -> bool {
        self.subcommands.is_empty() && self.flags.is_empty() && self.args.is_empty()
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
