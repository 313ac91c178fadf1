// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout reader task --+   (lines split on bytes, decoded lossily)
//!                        +--> one unbounded channel (arrival order)
//!   stderr reader task --+
//!   wait for exit, join readers, drain channel
//!   --> ProcessOutput { exit_code, output }
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::{ProcessBuilder, ProcessOutput};

/// Strips one trailing `\n` or `\r\n` and decodes the rest lossily.
fn decode_line(mut buf: &[u8]) -> String {
    if let Some(rest) = buf.strip_suffix(b"\n") {
        buf = rest.strip_suffix(b"\r").unwrap_or(rest);
    }
    String::from_utf8_lossy(buf).into_owned()
}

/// Spawns a task forwarding every line of `reader` to `tx` and the trace log.
///
/// Lines are split on raw bytes: invalid UTF-8 is replaced, never fatal, so
/// the pipe keeps draining until EOF.
fn spawn_reader<R>(
    reader: R,
    process_name: &str,
    stream_name: &'static str,
    tx: mpsc::UnboundedSender<String>,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = process_name.to_string();
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = decode_line(&buf);
                    trace!(process = %name, stream = %stream_name, line = %line, "output");
                    // The receiver outlives the readers; keep reading regardless.
                    let _ = tx.send(line);
                }
                Err(e) => {
                    trace!(process = %name, stream = %stream_name, error = %e, "read failed");
                    break;
                }
            }
        }
    })
}

/// Drains everything the readers produced into a single string.
fn collect_output(rx: &mut mpsc::UnboundedReceiver<String>) -> String {
    let mut output = String::new();
    while let Ok(line) = rx.try_recv() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

impl ProcessBuilder {
    /// Waits for the child to exit, buffering its combined output.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> std::io::Result<ProcessOutput> {
        // Unbounded: a bounded channel could fill up while we are blocked in
        // wait(), stalling the readers and, through the pipe, the child.
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let stdout_handle = child
            .stdout
            .take()
            .map(|stdout| spawn_reader(stdout, name, "stdout", tx.clone()));
        let stderr_handle = child
            .stderr
            .take()
            .map(|stderr| spawn_reader(stderr, name, "stderr", tx.clone()));
        drop(tx);

        let exit_status = child.wait().await?;

        for handle in [stdout_handle, stderr_handle].into_iter().flatten() {
            let _ = handle.await;
        }

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            collect_output(&mut rx),
        ))
    }
}
