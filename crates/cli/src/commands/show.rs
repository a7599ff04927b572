// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cb` with no arguments

use std::io::Write;

use anyhow::Result;
use cb_storage::Session;

pub fn handle(session: &Session, out: &mut impl Write) -> Result<()> {
    super::print_command(out, session)
}
