// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for packager tests.
//!
//! Provides log capture, fake executables, and archive inspection.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Drives a future while capturing `INFO` tracing output.
///
/// Returns the future's result together with the captured log text.
pub(super) async fn run_with_logs<T, Fut>(fut: Fut) -> (Result<T>, String)
where
    Fut: std::future::Future<Output = Result<T>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let result = {
        let _guard = tracing::subscriber::set_default(subscriber);
        fut.await
    };

    let logs = buffer
        .lock()
        .map(|guard| String::from_utf8_lossy(&guard).to_string())
        .unwrap_or_default();
    (result, logs)
}

/// Writes an executable shell script.
#[cfg(unix)]
pub(super) fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Entry names of a zip archive in stored order, with their Unix modes.
pub(super) fn zip_entries(path: &Path) -> Vec<(String, Option<u32>)> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| {
            let entry = archive.by_index(i).unwrap();
            (entry.name().to_string(), entry.unix_mode())
        })
        .collect()
}

/// Entry names of a zip archive in stored order.
pub(super) fn zip_names(path: &Path) -> Vec<String> {
    zip_entries(path).into_iter().map(|(name, _)| name).collect()
}
