// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env     process   workdir
//!     |         |         |
//!   Env      Builder   WorkDir
//!  overrides  Output   DirGuard (RAII)
//! ```

pub mod env;
pub mod process;
pub mod workdir;
