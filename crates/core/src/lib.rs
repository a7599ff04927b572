// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-core: command definition model, navigation and help-text parsing

pub mod definition;
pub mod help_text;
pub mod navigate;
pub mod suggest;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use definition::{Argument, CommandDefinition, Flag, Node, Subcommand, DEFAULT_FLAG_TYPE};
pub use help_text::{
    classify_line, definition_from_help, parse_help_text, HelpLine, HelpSections,
    SCRAPED_DESCRIPTION,
};
pub use navigate::{context_path, find_node, is_flag_token, resolve_path, PathUnresolved};
pub use suggest::{find_similar, format_suggestion};
