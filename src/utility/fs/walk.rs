// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deterministic directory traversal.
//!
//! Archives must list every file the generator wrote, dotfiles included,
//! and must list them in the same order on every run. The walker therefore
//! disables all of `ignore`'s standard filters and sorts by path.

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{FsError, HumaResult};

/// One entry found by [`sorted_walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    path: PathBuf,
    is_dir: bool,
}

impl WalkEntry {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }
}

fn build_walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_path(|a, b| a.cmp(b));
    builder
}

/// Walks `root` sequentially, returning `root` itself first and then every
/// directory and file beneath it in path order.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `root` does not exist, or
/// `FsError::IoError` on the first entry that cannot be read.
pub fn sorted_walk(root: &Path) -> HumaResult<Vec<WalkEntry>> {
    if !root.exists() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    let mut entries = Vec::new();
    for result in build_walker(root).build() {
        let entry = result.map_err(|e| {
            let message = e.to_string();
            FsError::io(
                root,
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other(message)),
            )
        })?;
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        entries.push(WalkEntry {
            path: entry.into_path(),
            is_dir,
        });
    }
    Ok(entries)
}
