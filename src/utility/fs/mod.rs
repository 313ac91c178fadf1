// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  sorted_walk()   ignore::Walk, every file, path order
//! ensure_dir()           tokio::fs::create_dir_all
//! move_file()            rename, copy + remove across devices
//! ```

pub mod walk;


use std::io;
use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{FsError, HumaResult};

/// Creates `path` and any missing parents.
///
/// # Errors
///
/// Returns `FsError::IoError` if the directory cannot be created.
pub async fn ensure_dir(path: &Path) -> HumaResult<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| FsError::io(path, e).into())
}

/// Moves a file, replacing `to` if it exists.
///
/// Falls back to copy and remove when `from` and `to` live on different
/// filesystems.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `from` does not exist, or
/// `FsError::IoError` if the move fails.
pub async fn move_file(from: &Path, to: &Path) -> HumaResult<()> {
    if !from.is_file() {
        return Err(FsError::NotFound(from.display().to_string()).into());
    }

    match fs::rename(from, to).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %from.display(), to = %to.display(), "rename across devices, copying");
            fs::copy(from, to).await.map_err(|e| FsError::io(to, e))?;
            fs::remove_file(from)
                .await
                .map_err(|e| FsError::io(from, e))?;
        }
        Err(e) => return Err(FsError::io(to, e).into()),
    }

    debug!(from = %from.display(), to = %to.display(), "moved");
    Ok(())
}
