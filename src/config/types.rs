// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! CliConfig:   name, command, generate
//! ToolsConfig: service, sdk_generator, output_dir
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default build step: `go install` only runs if `go test` passed.
pub const DEFAULT_BUILD_COMMAND: &str = "go test && go install";

/// Default CLI build step, run once per target platform.
pub const DEFAULT_CLI_COMMAND: &str = "go build";

/// Default code-generation hook, run once before the platform builds.
pub const DEFAULT_GENERATE_COMMAND: &str = "go generate";

/// Default SDK generator entry point (openapi-generator's container image).
pub const DEFAULT_SDK_GENERATOR: &str = "/usr/local/bin/docker-entrypoint.sh";

/// Companion CLI settings (`cli:` section).
///
/// Empty strings mean "not set" and are replaced by defaults when the
/// configuration is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Binary name; defaults to `<service>-cli`.
    pub name: String,
    /// Build command run for every platform.
    pub command: String,
    /// Code-generation hook run before building.
    pub generate: String,
}

impl CliConfig {
    /// Fills unset fields from the service name and the built-in defaults.
    pub(super) fn resolve(&mut self, service: &str) {
        if self.name.is_empty() {
            self.name = format!("{service}-cli");
        }
        if self.command.is_empty() {
            self.command = DEFAULT_CLI_COMMAND.to_string();
        }
        if self.generate.is_empty() {
            self.generate = DEFAULT_GENERATE_COMMAND.to_string();
        }
    }
}

/// External tool locations (`tools:` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Explicit path to the service binary. When unset, the service name is
    /// looked up in `PATH` after the build step installed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<PathBuf>,
    /// SDK generator executable, relative to the project root unless absolute.
    pub sdk_generator: PathBuf,
    /// Directory receiving every artifact, relative to the project root.
    pub output_dir: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            service: None,
            sdk_generator: PathBuf::from(DEFAULT_SDK_GENERATOR),
            output_dir: PathBuf::from("out"),
        }
    }
}
