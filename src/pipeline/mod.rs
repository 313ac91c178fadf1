// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The release pipeline.
//!
//! ```text
//! 1. load .huma.yaml           ConfigError::NotFound / MissingKey
//! 2. sh -c <command>           test, then install
//! 3. <service> openapi <service>.json
//! 4. mkdir -p <out>
//! 5. <service> --version  -->  extract_version()
//! 6. CliPackager               (skipped without cli/)
//! 7. SdkPackager               one per sdk-languages entry
//! ```
//!
//! Every stage is awaited before the next starts and the first error aborts
//! the run. Nothing is retried or rolled back; a rerun starts from stage 1.

pub mod version;


use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{CONFIG_FILE, Config};
use crate::core::process::builder::ProcessBuilder;
use crate::core::workdir::WorkDir;
use crate::error::{HumaError, Result};
use crate::packager::PackContext;
use crate::packager::cli::CliPackager;
use crate::packager::sdk::SdkPackager;
use crate::utility::fs::ensure_dir;

use version::extract_version;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    version: String,
    spec: PathBuf,
    artifacts: Vec<PathBuf>,
}

impl PipelineReport {
    /// The service version embedded in artifact names.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The generated OpenAPI document.
    #[must_use]
    pub fn spec(&self) -> &Path {
        &self.spec
    }

    /// Archives written, CLI platforms first, then SDKs, each in build order.
    #[must_use]
    pub fn artifacts(&self) -> &[PathBuf] {
        &self.artifacts
    }
}

/// Runs every release stage for the project at `root`.
#[derive(Debug, Clone)]
pub struct BuildPipeline {
    root: PathBuf,
}

impl BuildPipeline {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads `.huma.yaml` from the root and runs the pipeline.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` before any process starts if the file is
    /// missing or invalid, otherwise the first stage failure.
    pub async fn run(&self) -> Result<PipelineReport> {
        let config = Config::load_from_dir(&self.root)?;
        info!("Read {CONFIG_FILE} config file");
        for line in config.format_options() {
            debug!("{line}");
        }
        self.run_with(Arc::new(config)).await
    }

    /// Runs the pipeline with an already loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure.
    pub async fn run_with(&self, config: Arc<Config>) -> Result<PipelineReport> {
        let mut workdir = WorkDir::new(&self.root);

        info!("Building service {}", config.service);
        ProcessBuilder::raw(&config.command)
            .cwd(workdir.current())
            .name("build")
            .run()
            .await?;

        info!("Generating OpenAPI 3 spec");
        let spec = config.spec_path();
        self.service(&config)?
            .arg("openapi")
            .arg(&spec)
            .cwd(workdir.current())
            .run()
            .await?;

        ensure_dir(&self.root.join(&config.tools.output_dir)).await?;

        let version_cmd = self
            .service(&config)?
            .arg("--version")
            .cwd(workdir.current());
        let command_line = version_cmd.command_line();
        let output = version_cmd.run().await?;
        let version = extract_version(&command_line, output.output())?;
        info!("Service {} version is: {version}", config.service);

        let ctx = PackContext::new(config, &self.root, version.clone());
        let mut artifacts = CliPackager::new(ctx.clone()).run(&mut workdir).await?;
        artifacts.extend(SdkPackager::new(ctx).run().await?);

        Ok(PipelineReport {
            version,
            spec: self.root.join(spec),
            artifacts,
        })
    }

    /// The installed service binary: `tools.service` if set, else a `PATH`
    /// lookup of the service name.
    fn service(&self, config: &Config) -> Result<ProcessBuilder> {
        let builder = match &config.tools.service {
            Some(path) => ProcessBuilder::new(self.root.join(path)),
            None => ProcessBuilder::which(&config.service).map_err(HumaError::from)?,
        };
        Ok(builder.name(config.service.clone()))
    }
}
