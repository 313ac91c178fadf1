// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Artifact packaging.
//!
//! ```text
//! PackContext (config, root, version)
//!      |
//!      +--> CliPackager   cli/  generate, GOOS/GOARCH x3, zip, move to out/
//!      +--> SdkPackager   generator per language, zip out/<base>/
//!                |
//!                v
//!             archive::archive_path()   zip crate, spawn_blocking
//! ```

pub mod archive;
pub mod cli;
pub mod sdk;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;

/// State shared by the packagers once the service version is known.
#[derive(Debug, Clone)]
pub struct PackContext {
    config: Arc<Config>,
    root: PathBuf,
    version: String,
}

impl PackContext {
    #[must_use]
    pub fn new(config: Arc<Config>, root: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            config,
            root: root.into(),
            version: version.into(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Project root; relative configuration paths resolve against it.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Version string embedded in every artifact name.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Absolute output directory.
    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.root.join(&self.config.tools.output_dir)
    }
}

#[cfg(test)]
mod tests;
#[cfg(test)]
mod test_utils;
