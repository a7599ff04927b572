// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry adapter used when remote lookups are turned off.

use super::{RegistryAdapter, RegistryError};

/// Answers every lookup with `Unavailable` without touching the network.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledRegistry;

impl RegistryAdapter for DisabledRegistry {
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, RegistryError> {
        Err(RegistryError::unavailable(name, "registry disabled"))
    }
}
