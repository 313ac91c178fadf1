// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)        pipeline (stages)
//!                              build / openapi / version
//!                                      |
//!              ,-----------------------+---,
//!              |          config           |
//!              |  .huma.yaml + HUMA_* env  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                        packager
//!                  cli x3 / sdk per lang
//!                            |
//!                            v
//!                   archive (zip crate)
//!
//!   +-----------------------------------------+
//!   |  core   process, env, workdir           |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod packager;
pub mod pipeline;
pub mod utility;
