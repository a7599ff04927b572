// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fallback when stdout is not a terminal or reports no size.
pub const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| usize::from(cols))
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_WIDTH)
}
