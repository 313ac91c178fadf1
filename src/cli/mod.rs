// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line surface.
//!
//! ```text
//! huma-build [-l LEVEL] [--file-log-level LEVEL] [--log-file FILE]
//! ```
//!
//! There are no subcommands or positional arguments: the pipeline always runs
//! against `.huma.yaml` in the current directory.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Service release pipeline.
///
/// Builds a service, generates its OpenAPI document, cross-compiles its CLI
/// and packages SDKs.
#[derive(Debug, Parser)]
#[command(
    name = "huma-build",
    author,
    version,
    about = "Service release pipeline",
    long_about = "huma-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds and tests the service in the current directory, writes\n\
                  its OpenAPI document, cross-compiles the companion CLI found in\n\
                  `cli/` and packages one SDK per configured language into `out/`.",
    after_help = "CONFIG FILE:\n\n\
                  huma-build reads `.huma.yaml` from the current directory:\n\n\
                  \x20 service: myservice          (required)\n\
                  \x20 command: go test && go install\n\
                  \x20 cli:\n\
                  \x20   name: myservice-cli\n\
                  \x20   command: go build\n\
                  \x20 sdk-languages: [go, python]\n\n\
                  Any key can be overridden from the environment, e.g.\n\
                  HUMA_TOOLS__SDK_GENERATOR=/opt/openapi-generator."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
