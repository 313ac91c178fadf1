// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Companion CLI packaging.
//!
//! ```text
//! cli/ exists? -- no --> "Skipping CLI build"
//!      | yes
//! WorkDir::enter("cli")
//!   sh -c <cli.generate>
//!   for windows, mac, linux:
//!     GOOS=.. GOARCH=amd64 sh -c <cli.command>
//!     zip <name>-<tag>-<version>.zip <name>[.exe]
//!     move --> <out>/
//! guard drop --> back to root
//! ```

pub mod platform;


use std::path::{Path, PathBuf};

use tracing::info;

use super::PackContext;
use super::archive::archive_path;
use crate::core::process::builder::ProcessBuilder;
use crate::core::workdir::WorkDir;
use crate::error::Result;
use crate::utility::fs::move_file;

use platform::PLATFORMS;

/// Directory holding the companion CLI sources, relative to the root.
pub const CLI_DIR: &str = "cli";

/// Builds and archives the companion CLI for every platform.
#[derive(Debug, Clone)]
pub struct CliPackager {
    ctx: PackContext,
}

impl CliPackager {
    #[must_use]
    pub const fn new(ctx: PackContext) -> Self {
        Self { ctx }
    }

    /// Whether the project has a companion CLI at all.
    #[must_use]
    pub fn applies(workdir: &WorkDir) -> bool {
        workdir.join(CLI_DIR).is_dir()
    }

    /// Runs the CLI stage from `workdir`'s current directory.
    ///
    /// Returns the archives written to the output directory, in platform
    /// order. Returns nothing, after logging, when there is no `cli`
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns the first process, archive or move failure; later platforms
    /// are not attempted.
    pub async fn run(&self, workdir: &mut WorkDir) -> Result<Vec<PathBuf>> {
        if !Self::applies(workdir) {
            info!("Skipping CLI build, no `{CLI_DIR}` folder found.");
            return Ok(Vec::new());
        }

        let cli = &self.ctx.config().cli;
        let out_dir = self.ctx.out_dir();
        let guard = workdir.enter(CLI_DIR)?;

        ProcessBuilder::raw(&cli.generate)
            .cwd(guard.current())
            .name("generate")
            .run()
            .await?;

        let mut artifacts = Vec::with_capacity(PLATFORMS.len());
        for platform in &PLATFORMS {
            let artifact = platform.artifact_name(&cli.name, self.ctx.version());
            info!("Building CLI {artifact}");

            ProcessBuilder::raw(&cli.command)
                .cwd(guard.current())
                .env(platform.env())
                .name(format!("cli-{}", platform.tag))
                .run()
                .await?;

            let zip_name = format!("{artifact}.zip");
            let staged = guard.join(&zip_name);
            archive_path(
                guard.current(),
                Path::new(&platform.binary_name(&cli.name)),
                &staged,
            )
            .await?;

            let dest = out_dir.join(&zip_name);
            move_file(&staged, &dest).await?;
            artifacts.push(dest);
        }

        Ok(artifacts)
    }
}
