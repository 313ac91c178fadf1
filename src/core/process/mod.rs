// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("go") / ::which("svc") / ::raw("go test && go install")
//!   .args() .cwd() .env(overrides) .name()
//!   .run()
//!       --> tokio::process::Command
//!           stdout + stderr --> one channel (arrival order)
//!       --> ProcessOutput { exit_code, output }
//!       --> ProcessError::NonZeroExit { command, code, output } on failure
//! ```

pub mod builder;
mod io;
mod runner;
