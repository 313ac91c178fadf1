// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped working directory.
//!
//! ```text
//! WorkDir [root]
//!   enter("cli") --> DirGuard        WorkDir [root, root/cli]
//!                      |  processes run with .cwd(guard.current())
//!                      v
//!                    drop            WorkDir [root]
//! ```
//!
//! The pipeline never calls `std::env::set_current_dir`. The "current
//! directory" is this value, handed to every process it launches, and the
//! guard pops it on every exit path (`?`, early return, panic unwinding).

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsError, HumaResult};

/// A stack of directories; the top is the directory processes run in.
#[derive(Debug, Clone)]
pub struct WorkDir {
    stack: Vec<PathBuf>,
}

impl WorkDir {
    /// Creates a context rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            stack: vec![root.into()],
        }
    }

    /// The directory at the bottom of the stack.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.stack[0]
    }

    /// The directory commands currently run in.
    #[must_use]
    pub fn current(&self) -> &Path {
        self.stack.last().map_or_else(|| self.root(), PathBuf::as_path)
    }

    /// Resolves `path` against the current directory.
    #[must_use]
    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.current().join(path)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Changes into `dir` (relative to the current directory) until the
    /// returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if `dir` is not an existing directory.
    pub fn enter(&mut self, dir: impl AsRef<Path>) -> HumaResult<DirGuard<'_>> {
        let target = self.join(dir);
        if !target.is_dir() {
            return Err(FsError::NotFound(target.display().to_string()).into());
        }
        debug!(dir = %target.display(), "enter");
        self.stack.push(target);
        Ok(DirGuard { workdir: self })
    }
}

/// Restores the previous directory of a [`WorkDir`] when dropped.
#[derive(Debug)]
pub struct DirGuard<'a> {
    workdir: &'a mut WorkDir,
}

impl Deref for DirGuard<'_> {
    type Target = WorkDir;

    fn deref(&self) -> &Self::Target {
        self.workdir
    }
}

impl DerefMut for DirGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.workdir
    }
}

impl Drop for DirGuard<'_> {
    fn drop(&mut self) {
        if let Some(left) = self.workdir.stack.pop() {
            debug!(dir = %left.display(), back = %self.workdir.current().display(), "leave");
        }
    }
}

#[cfg(test)]
mod tests;
