// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage layer for command-builder

mod atomic;
mod definitions;
mod env;
mod layout;
mod session;

pub use definitions::{DefinitionStore, StoreError, DEFINITION_EXT};
pub use layout::{Layout, LayoutError, APP_DIR};
pub use session::{Session, SessionError, SessionStore};
