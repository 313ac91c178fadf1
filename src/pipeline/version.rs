// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Service version extraction.

use crate::error::{HumaResult, ProcessError};

/// Returns the last whitespace-separated token of `output`.
///
/// `myservice version 1.2.3\n` yields `1.2.3`. The token is used verbatim;
/// it is not checked against any versioning scheme.
///
/// # Errors
///
/// Returns `ProcessError::UnexpectedOutput` if `output` holds no token.
pub fn extract_version(command: &str, output: &str) -> HumaResult<String> {
    output
        .split_whitespace()
        .last()
        .map(str::to_string)
        .ok_or_else(|| {
            ProcessError::UnexpectedOutput {
                command: command.to_string(),
                output: output.to_string(),
            }
            .into()
        })
}
