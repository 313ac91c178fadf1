// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()
//! args, cwd, inherited env + overrides, piped stdio
//!   |
//!   v
//! spawn() ----(io error)----> ProcessError::SpawnFailed
//!   |
//!   v
//! run_child()  (buffer until exit)
//!   |
//!   v
//! validate exit_code ----(!= 0)----> ProcessError::NonZeroExit
//!   |
//!   v
//! ProcessOutput { exit_code, output }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::core::env::current_env_with;
use crate::error::{HumaError, ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging and errors).
    ///
    /// Non-UTF-8 arguments are shown lossily; the child still receives the
    /// original bytes.
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] (wrapped in [`HumaError`]) if:
    /// - Spawning the child process fails.
    /// - Waiting on the child or reading its output fails.
    /// - The process exits with a non-zero status.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|source| {
            HumaError::from(ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })
        })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self.run_child(&name, &mut child).await.map_err(|source| {
            HumaError::from(ProcessError::WaitFailed {
                command: cmd_line.clone(),
                source,
            })
        })?;

        if !output.success() {
            error!(process = %name, exit_code = output.exit_code(), "process failed");
            return Err(HumaError::from(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
                output: output.into_output(),
            })
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        // Inherited variables first, overrides last: the override wins.
        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(current_env_with(env));
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        command.kill_on_drop(true);

        command
    }
}
