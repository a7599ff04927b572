// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file replacement.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write `contents` to `path` atomically (write to .tmp, then rename).
///
/// A crash mid-write leaves the previous file intact; readers never observe
/// a partially written document.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)
}
