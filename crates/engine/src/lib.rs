// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Definition resolution engine for command-builder

mod error;
mod registry;
mod resolver;
mod scraper;

pub use error::{FetchError, ResolveError, ScrapeError};
pub use registry::RegistryClient;
pub use resolver::{DefinitionSource, ResolveEvent, Resolved, Resolver};
pub use scraper::{Scraper, HELP_FLAG};
