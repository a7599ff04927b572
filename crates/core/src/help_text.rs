// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic parsing of `--help` output
//!
//! Help text is not standardized, so parsing is line-oriented and
//! best-effort. Each physical line is classified on its own:
//!
//! - `  -v, --verbose    Enable verbose output` is a flag (`--verbose`)
//! - `  init          Initialize a repo` is a subcommand (`init`)
//! - anything else is ignored
//!
//! Flag matching takes precedence, so a line is never both. Entries keep the
//! order they appear in the text and are not deduplicated.

use crate::definition::{Flag, Node};
use regex::Regex;
use std::sync::LazyLock;

/// Description given to definitions derived from help output.
pub const SCRAPED_DESCRIPTION: &str = "Auto-generated from --help";

/// Section headers that look like subcommand lines but are not.
const HEADER_WORDS: &[&str] = &["usage:", "options:", "commands:", "arguments:"];

/// Optional short flag, then a `--long` flag, then description.
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static FLAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(?:-[a-zA-Z0-9],?\s+)?(--[a-zA-Z0-9][a-zA-Z0-9_-]*)\s+(.*)$")
        .expect("constant regex pattern is valid")
});

/// Identifier-like token, two or more spaces, then description.
#[allow(clippy::expect_used)]
static SUBCOMMAND_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([a-zA-Z0-9][a-zA-Z0-9_.:-]*) {2,}(\S.*)$")
        .expect("constant regex pattern is valid")
});

/// Flags and subcommands recognized in one block of help text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpSections {
    pub flags: Vec<Flag>,
    pub subcommands: Vec<Node>,
}

/// How a single line of help text was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpLine {
    Flag(Flag),
    Subcommand(Node),
    Ignored,
}

/// Classify one physical line.
pub fn classify_line(line: &str) -> HelpLine {
    if let Some(caps) = FLAG_LINE.captures(line) {
        return HelpLine::Flag(Flag::new(&caps[1], caps[2].trim_end()));
    }
    if let Some(caps) = SUBCOMMAND_LINE.captures(line) {
        let name = &caps[1];
        if is_header_word(name) {
            return HelpLine::Ignored;
        }
        return HelpLine::Subcommand(Node::new(name, caps[2].trim_end()));
    }
    HelpLine::Ignored
}

fn is_header_word(name: &str) -> bool {
    HEADER_WORDS
        .iter()
        .any(|header| header.eq_ignore_ascii_case(name))
}

/// Parse a block of help text into flags and subcommands.
pub fn parse_help_text(text: &str) -> HelpSections {
    let mut sections = HelpSections::default();
    for line in text.lines() {
        match classify_line(line) {
            HelpLine::Flag(flag) => sections.flags.push(flag),
            HelpLine::Subcommand(sub) => sections.subcommands.push(sub),
            HelpLine::Ignored => {}
        }
    }
    sections
}

/// Build a root definition for `name` from its help text.
pub fn definition_from_help(name: &str, text: &str) -> Node {
    let HelpSections { flags, subcommands } = parse_help_text(text);
    Node {
        name: name.to_string(),
        description: SCRAPED_DESCRIPTION.to_string(),
        subcommands,
        flags,
        args: Vec::new(),
    }
}

#[cfg(test)]
#[path = "help_text_tests.rs"]
mod tests;
