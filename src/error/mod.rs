// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            HumaError (~24 bytes)
//!                   |
//!     +-------+-----+-----+--------+
//!     |       |           |        |
//!     v       v           v        v
//!   Config  Process       Fs      Other
//!    Box      Box         Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config   NotFound, ParseError, MissingKey
//!   Process  ExecutableNotFound, SpawnFailed, WaitFailed, NonZeroExit,
//!            UnexpectedOutput
//!   Fs       NotFound, IoError, Archive
//! ```
//!
//! Nothing below `main` recovers from an error: every stage propagates with `?`
//! and the binary reports the chain once.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HumaError`].
pub type HumaResult<T> = std::result::Result<T, HumaError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack. The
/// wrapped error is exposed as the `source()`, so `{:#}` prints each message
/// of the chain once.
#[derive(Debug, Error)]
pub enum HumaError {
    /// Configuration error.
    #[error("config error")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error")]
    Fs(#[from] Box<FsError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HumaError {
                fn from(err: $error) -> Self {
                    HumaError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("cannot find required config file '{0}'")]
    NotFound(String),

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}'")]
    MissingKey { key: String },
}

// --- Process Errors ---

/// Process execution errors.
///
/// `command` is always the full command line (program plus arguments).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process `{command}`")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on a running process failed.
    #[error("failed waiting for process `{command}`")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process `{command}` exited with code {code}\n{output}")]
    NonZeroExit {
        command: String,
        code: i32,
        output: String,
    },

    /// Process succeeded but printed something we could not use.
    #[error("unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput { command: String, output: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}'")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Archive could not be written.
    #[error("failed to write archive '{path}'")]
    Archive {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
