// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-column rendering of what can follow the current command.
//!
//! Each section aligns its own description column four spaces past its
//! longest name. Descriptions wrap at word boundaries to fit the terminal.

use std::io::{self, Write};

use cb_core::Node;
use serde::Serialize;

use crate::color;

/// Gap between the name column and descriptions.
const PADDING: usize = 4;
/// Narrowest description column, however small the terminal.
const MIN_DESC_WIDTH: usize = 20;
/// Columns reserved beside the longest name when sizing descriptions.
const NAME_OVERHEAD: usize = 8;

/// One row in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Entry {
    /// Description as displayed, including the required/optional marker.
    fn display_description(&self) -> String {
        match self.required {
            Some(true) => format!("{} (Required)", self.description),
            Some(false) => format!("{} (Optional)", self.description),
            None => self.description.clone(),
        }
    }
}

/// Arguments, subcommands and options available at one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub arguments: Vec<Entry>,
    pub subcommands: Vec<Entry>,
    pub options: Vec<Entry>,
}

impl Listing {
    pub fn for_node(node: &Node) -> Self {
        Self {
            arguments: node
                .args
                .iter()
                .map(|a| Entry {
                    name: a.name.clone(),
                    description: a.description.clone(),
                    required: Some(a.required),
                    kind: None,
                })
                .collect(),
            subcommands: node
                .subcommands
                .iter()
                .map(|s| Entry {
                    name: s.name.clone(),
                    description: s.description.clone(),
                    required: None,
                    kind: None,
                })
                .collect(),
            options: option_entries(node),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.subcommands.is_empty() && self.options.is_empty()
    }

    /// Write all non-empty sections with headers.
    pub fn render(&self, out: &mut impl Write, width: usize, colorize: bool) -> io::Result<()> {
        let desc_width = description_width(self.entries(), width);
        let renderer = Renderer {
            desc_width,
            colorize,
        };

        if !self.arguments.is_empty() {
            renderer.header(out, "Arguments:")?;
            renderer.rows(out, &self.arguments)?;
            writeln!(out)?;
        }
        if !self.subcommands.is_empty() {
            renderer.header(out, "Subcommands:")?;
            renderer.rows(out, &self.subcommands)?;
            writeln!(out)?;
        }
        if !self.options.is_empty() {
            renderer.header(out, "Options:")?;
            renderer.rows(out, &self.options)?;
        }
        Ok(())
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.arguments
            .iter()
            .chain(&self.subcommands)
            .chain(&self.options)
    }
}

/// Flags of `node` as listing rows.
pub fn option_entries(node: &Node) -> Vec<Entry> {
    node.flags
        .iter()
        .map(|f| Entry {
            name: f.name.clone(),
            description: f.description.clone(),
            required: None,
            kind: Some(f.kind.clone()),
        })
        .collect()
}

/// Write `entries` as bare rows without a header.
pub fn render_rows(
    out: &mut impl Write,
    entries: &[Entry],
    width: usize,
    colorize: bool,
) -> io::Result<()> {
    Renderer {
        desc_width: description_width(entries.iter(), width),
        colorize,
    }
    .rows(out, entries)
}

fn description_width<'a>(entries: impl Iterator<Item = &'a Entry>, width: usize) -> usize {
    let max_name = entries.map(|e| e.name.len()).max().unwrap_or(0);
    width
        .saturating_sub(max_name + NAME_OVERHEAD)
        .max(MIN_DESC_WIDTH)
}

struct Renderer {
    desc_width: usize,
    colorize: bool,
}

impl Renderer {
    fn header(&self, out: &mut impl Write, label: &str) -> io::Result<()> {
        if self.colorize {
            writeln!(out, "{}", color::apply_header(label))
        } else {
            writeln!(out, "{label}")
        }
    }

    fn rows(&self, out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
        let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        let indent = " ".repeat(2 + name_width + PADDING);

        for entry in entries {
            let mut lines = wrap(&entry.display_description(), self.desc_width).into_iter();
            let first = lines.next().unwrap_or_default();
            let padded = format!("{:<name_width$}", entry.name);
            let name = if self.colorize {
                color::apply_literal(&padded)
            } else {
                padded
            };
            let line = format!("  {name}{}{first}", " ".repeat(PADDING));
            writeln!(out, "{}", line.trim_end())?;
            for rest in lines {
                writeln!(out, "{indent}{rest}")?;
            }
        }
        Ok(())
    }
}

/// Greedy word wrap. Words longer than `max_width` get a line of their own.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return lines;
    };

    let mut current = first.to_string();
    for word in words {
        if current.len() + 1 + word.len() > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
