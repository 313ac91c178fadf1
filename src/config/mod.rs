// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for huma-build.
//!
//! # Configuration Sources
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. .huma.yaml (project root, required)
//! 3. HUMA_* env vars
//! ```
//!
//! # File Format
//!
//! ```yaml
//! service: myservice
//! command: go test ./... && go install   # optional
//! cli:                                   # optional
//!   name: my-cli
//!   command: go build -o my-cli
//! sdk-languages:
//!   - go
//!   - python
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, HumaError, HumaResult, Result};

use loader::ConfigLoader;
use types::{CliConfig, DEFAULT_BUILD_COMMAND, ToolsConfig};

/// Fixed name of the project configuration file.
pub const CONFIG_FILE: &str = ".huma.yaml";

/// Prefix of environment variables that override the file.
pub const ENV_PREFIX: &str = "HUMA";

/// Complete pipeline configuration.
///
/// Produced by [`ConfigLoader::build`], which resolves every default once;
/// the pipeline only ever reads it afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service binary name (required).
    pub service: String,
    /// Build command for the service.
    pub command: String,
    /// Companion CLI settings, used when a `cli` directory exists.
    pub cli: CliConfig,
    /// SDK generator names, built in this order.
    #[serde(rename = "sdk-languages")]
    pub sdk_languages: Vec<String>,
    /// External tool locations.
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use huma_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_yaml_file(".huma.yaml")
    ///     .with_env_prefix("HUMA")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Loads `.huma.yaml` from `root`, with `HUMA_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, otherwise
    /// any error from [`ConfigLoader::build`].
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Err(HumaError::from(ConfigError::NotFound(path.display().to_string())).into());
        }
        Self::builder()
            .add_yaml_file(path)
            .with_env_prefix(ENV_PREFIX)
            .build()
    }

    /// Load configuration from a single YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid YAML, or
    /// does not describe a service.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_yaml_file(path).build()
    }

    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid YAML or does not describe
    /// a service.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_yaml_str(content).build()
    }

    /// Applies defaults and checks the one required key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if `service` is empty.
    pub fn resolve_and_validate(&mut self) -> HumaResult<()> {
        if self.service.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                key: "service".to_string(),
            }
            .into());
        }
        if self.command.is_empty() {
            self.command = DEFAULT_BUILD_COMMAND.to_string();
        }
        self.cli.resolve(&self.service);
        Ok(())
    }

    /// Path of the OpenAPI document the service writes, relative to the root.
    #[must_use]
    pub fn spec_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.json", self.service))
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("service", self.service.clone());
        options.insert("command", self.command.clone());
        options.insert("cli.name", self.cli.name.clone());
        options.insert("cli.command", self.cli.command.clone());
        options.insert("cli.generate", self.cli.generate.clone());
        options.insert("sdk-languages", self.sdk_languages.join(","));
        if let Some(service) = &self.tools.service {
            options.insert("tools.service", service.display().to_string());
        }
        options.insert(
            "tools.sdk_generator",
            self.tools.sdk_generator.display().to_string(),
        );
        options.insert(
            "tools.output_dir",
            self.tools.output_dir.display().to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
