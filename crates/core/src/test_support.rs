// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::definition::{Argument, Flag, Node};

/// Fluent builder for definition trees in tests.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    node: Node,
}

/// Start building a node named `name`.
pub fn node(name: &str) -> NodeBuilder {
    NodeBuilder {
        node: Node::new(name, ""),
    }
}

impl NodeBuilder {
    pub fn description(mut self, description: &str) -> Self {
        self.node.description = description.to_string();
        self
    }

    pub fn flag(mut self, name: &str, description: &str) -> Self {
        self.node.flags.push(Flag::new(name, description));
        self
    }

    pub fn arg(mut self, name: &str, required: bool) -> Self {
        self.node.args.push(Argument {
            name: name.to_string(),
            description: format!("The {name}"),
            required,
        });
        self
    }

    pub fn sub(mut self, child: NodeBuilder) -> Self {
        self.node.subcommands.push(child.build());
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}

/// A small `git`-shaped definition used across test suites.
pub fn git_definition() -> Node {
    node("git")
        .description("the stupid content tracker")
        .flag("--version", "Print the version")
        .sub(
            node("clone")
                .description("Clone a repository into a new directory")
                .arg("repository", true)
                .arg("directory", false)
                .flag("--depth", "Create a shallow clone"),
        )
        .sub(
            node("remote")
                .description("Manage set of tracked repositories")
                .sub(node("add").description("Add a remote").arg("name", true))
                .sub(node("remove").description("Remove a remote")),
        )
        .sub(
            node("commit")
                .description("Record changes to the repository")
                .flag("--message", "Use the given message"),
        )
        .build()
}
