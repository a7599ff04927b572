// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the definition registry and help-text capture

pub mod help;
pub mod registry;
pub mod traced;

pub use help::{HelpError, HelpRunner, ProcessHelpRunner};
pub use registry::{
    DisabledRegistry, HttpRegistry, RegistryAdapter, RegistryConfig, RegistryError,
    DEFAULT_REGISTRY_TIMEOUT, DEFAULT_REGISTRY_URL,
};
pub use traced::{TracedHelpRunner, TracedRegistry};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use help::FakeHelpRunner;
#[cfg(any(test, feature = "test-support"))]
pub use registry::FakeRegistry;
