// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SDK generation and packaging.
//!
//! ```text
//! for lang in sdk-languages:
//!   base = <service>-<lang>-<version>
//!   <sdk_generator> generate --enable-post-process-file
//!       -i <service>.json -g <lang> -o <out>/<base>
//!   zip <out>/<base>.zip  (entries under <base>/)
//! ```


use std::path::{Path, PathBuf};

use tracing::info;

use super::PackContext;
use super::archive::archive_path;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Generates one SDK per configured language and archives each.
#[derive(Debug, Clone)]
pub struct SdkPackager {
    ctx: PackContext,
}

impl SdkPackager {
    #[must_use]
    pub const fn new(ctx: PackContext) -> Self {
        Self { ctx }
    }

    /// `<service>-<language>-<version>`.
    #[must_use]
    pub fn base_name(&self, language: &str) -> String {
        format!(
            "{}-{language}-{}",
            self.ctx.config().service,
            self.ctx.version()
        )
    }

    /// The generator invocation for `language`, run from the project root.
    ///
    /// A relative `tools.sdk_generator` is taken relative to the project root.
    #[must_use]
    pub fn generator(&self, language: &str) -> ProcessBuilder {
        let config = self.ctx.config();
        let output = config.tools.output_dir.join(self.base_name(language));
        ProcessBuilder::new(self.ctx.root().join(&config.tools.sdk_generator))
            .arg("generate")
            .arg("--enable-post-process-file")
            .arg("-i")
            .arg(config.spec_path())
            .arg("-g")
            .arg(language)
            .arg("-o")
            .arg(output)
            .cwd(self.ctx.root())
            .name(format!("sdk-{language}"))
    }

    /// Generates and archives every SDK in configured order.
    ///
    /// Returns the archive paths. Generated directories are left in place.
    ///
    /// # Errors
    ///
    /// Returns the first generator or archive failure; later languages are
    /// not attempted.
    pub async fn run(&self) -> Result<Vec<PathBuf>> {
        let out_dir = self.ctx.out_dir();
        let languages = &self.ctx.config().sdk_languages;
        let mut artifacts = Vec::with_capacity(languages.len());

        for language in languages {
            let base_name = self.base_name(language);
            info!("Building {base_name}");

            self.generator(language).run().await?;

            let archive = out_dir.join(format!("{base_name}.zip"));
            archive_path(&out_dir, Path::new(&base_name), &archive).await?;
            artifacts.push(archive);
        }

        Ok(artifacts)
    }
}
