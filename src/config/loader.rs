// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_yaml_file(req)
//!   .add_yaml_str()
//!   .with_env_prefix("HUMA")   HUMA_TOOLS__OUTPUT_DIR=dist
//!        |
//!        v
//!    build() --> deserialize --> resolve_and_validate() --> Config
//! ```

use std::path::PathBuf;

use super::Config;
use crate::error::{ConfigError, HumaError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    /// Source names, reported in parse errors.
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a YAML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid YAML, `build()` will return an error.
    #[must_use]
    pub fn add_yaml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Yaml).required(true));
        self.sources.push(p.to_path_buf());
        self
    }

    #[must_use]
    pub fn add_yaml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Yaml));
        self.sources.push(PathBuf::from("<string>"));
        self
    }

    /// Layers `<PREFIX>_<KEY>` environment variables over the files.
    ///
    /// Nested keys use a double underscore: `HUMA_TOOLS__SDK_GENERATOR`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - A required configuration file is missing or is not valid YAML.
    /// - The merged configuration cannot be deserialized into `Config`.
    /// - `service` is empty after merging.
    pub fn build(self) -> Result<Config> {
        let origin = self.origin();
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            ),
            None => self.builder,
        };
        let parse_error = |e: config::ConfigError| {
            HumaError::from(ConfigError::ParseError {
                path: origin.clone(),
                message: e.to_string(),
            })
        };
        let cfg = builder.build().map_err(parse_error)?;
        let mut config: Config = cfg.try_deserialize().map_err(parse_error)?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// Human-readable list of the sources, for error messages.
    fn origin(&self) -> String {
        self.sources
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
