// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cross-compilation targets for the companion CLI.

use crate::core::env::Env;

/// One CLI build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Name used in the archive file name.
    pub tag: &'static str,
    /// `GOOS` value.
    pub os: &'static str,
    /// `GOARCH` value.
    pub arch: &'static str,
    /// Suffix of the produced binary.
    pub exe_suffix: &'static str,
}

/// Targets in build order.
pub const PLATFORMS: [Platform; 3] = [
    Platform {
        tag: "windows",
        os: "windows",
        arch: "amd64",
        exe_suffix: ".exe",
    },
    Platform {
        tag: "mac",
        os: "darwin",
        arch: "amd64",
        exe_suffix: "",
    },
    Platform {
        tag: "linux",
        os: "linux",
        arch: "amd64",
        exe_suffix: "",
    },
];

impl Platform {
    /// `<name>-<tag>-<version>`, the archive's base name.
    #[must_use]
    pub fn artifact_name(&self, name: &str, version: &str) -> String {
        format!("{name}-{}-{version}", self.tag)
    }

    /// File name of the binary the build command leaves behind.
    #[must_use]
    pub fn binary_name(&self, name: &str) -> String {
        format!("{name}{}", self.exe_suffix)
    }

    /// `GOOS`/`GOARCH` overrides for the build command.
    #[must_use]
    pub fn env(&self) -> Env {
        Env::new().with("GOOS", self.os).with("GOARCH", self.arch)
    }
}
