// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> BuildPipeline::new(cwd).run()
//!                                   |
//!                         Err --> "Error: {e:#}", exit 1
//! ```

use std::process::ExitCode;

use anyhow::Context;
use huma_build::cli;
use huma_build::error::Result;
use huma_build::logging::init_logging;
use huma_build::pipeline::{BuildPipeline, PipelineReport};
use tracing::info;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match release().await {
        Ok(report) => {
            info!(
                version = report.version(),
                artifacts = report.artifacts().len(),
                "Release complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn release() -> Result<PipelineReport> {
    let root = std::env::current_dir().context("failed to read the current directory")?;
    BuildPipeline::new(root).run().await
}
