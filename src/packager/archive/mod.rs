// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Zip archive creation.
//!
//! ```text
//! archive_path(base_dir, entry, output)
//!   sorted_walk(base_dir/entry)
//!   NamedTempFile in output's directory
//!     ZipWriter: dirs as "a/", files Deflate + mode bits
//!   persist --> output
//! ```
//!
//! Entry names are relative to `base_dir`, so
//! `archive_path("out", "svc-go-1.0", ..)` yields `svc-go-1.0/...` entries,
//! the same layout `cd out && zip -r svc-go-1.0.zip svc-go-1.0` produces.

use std::fs::File;
use std::io;
use std::path::{Component, Path};

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{FsError, HumaError, HumaResult, Result};
use crate::utility::fs::walk::sorted_walk;

/// Recursively zips `base_dir/entry` (a file or a directory) into `output`.
///
/// Runs on the blocking pool. The archive only appears at `output` once it
/// has been completely written.
///
/// # Errors
///
/// Returns an [`FsError`] if the source is missing, a file cannot be read,
/// or the archive cannot be written or moved into place.
pub async fn archive_path(base_dir: &Path, entry: &Path, output: &Path) -> Result<()> {
    let base_dir = base_dir.to_path_buf();
    let entry = entry.to_path_buf();
    let output = output.to_path_buf();

    debug!(
        base_dir = %base_dir.display(),
        entry = %entry.display(),
        archive = %output.display(),
        "Creating archive"
    );

    let (output, count) = tokio::task::spawn_blocking(move || {
        write_archive(&base_dir, &entry, &output).map(|count| (output, count))
    })
    .await
    .context("archive task panicked")??;

    info!(archive = %output.display(), entries = count, "Archive created");
    Ok(())
}

/// Writes the archive synchronously, returning the number of entries.
fn write_archive(base_dir: &Path, entry: &Path, output: &Path) -> HumaResult<usize> {
    let entries = sorted_walk(&base_dir.join(entry))?;

    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::io(parent, e))?;
    let archive_err = |source: ZipError| FsError::Archive {
        path: output.display().to_string(),
        source,
    };

    {
        let mut zip = ZipWriter::new(temp.as_file_mut());
        for walked in &entries {
            let name = entry_name(base_dir, walked.path())?;
            if walked.is_dir() {
                zip.add_directory(format!("{name}/"), directory_options())
                    .map_err(archive_err)?;
            } else {
                let mut file =
                    File::open(walked.path()).map_err(|e| FsError::io(walked.path(), e))?;
                zip.start_file(name, file_options(&file, walked.path())?)
                    .map_err(archive_err)?;
                io::copy(&mut file, &mut zip).map_err(|e| FsError::io(walked.path(), e))?;
            }
        }
        zip.finish().map_err(archive_err)?;
    }

    set_readable(&temp)?;
    temp.persist(output)
        .map_err(|e| FsError::io(output, e.error))?;
    Ok(entries.len())
}

/// Archive name of `path`: relative to `base_dir`, `/`-separated.
fn entry_name(base_dir: &Path, path: &Path) -> HumaResult<String> {
    let relative = path.strip_prefix(base_dir).map_err(|_| {
        HumaError::Other(
            format!(
                "{} is not inside {}",
                path.display(),
                base_dir.display()
            )
            .into(),
        )
    })?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

fn directory_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o755)
}

#[cfg(unix)]
fn file_options(file: &File, path: &Path) -> HumaResult<FileOptions> {
    use std::os::unix::fs::PermissionsExt;

    let mode = file
        .metadata()
        .map_err(|e| FsError::io(path, e))?
        .permissions()
        .mode();
    Ok(FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(mode & 0o777))
}

#[cfg(not(unix))]
fn file_options(_file: &File, _path: &Path) -> HumaResult<FileOptions> {
    Ok(FileOptions::default().compression_method(CompressionMethod::Deflated))
}

/// Temp files are created owner-only; published archives are not.
#[cfg(unix)]
fn set_readable(temp: &NamedTempFile) -> HumaResult<()> {
    use std::os::unix::fs::PermissionsExt;

    temp.as_file()
        .set_permissions(std::fs::Permissions::from_mode(0o644))
        .map_err(|e| FsError::io(temp.path(), e).into())
}

#[cfg(not(unix))]
fn set_readable(_temp: &NamedTempFile) -> HumaResult<()> {
    Ok(())
}
