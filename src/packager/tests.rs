// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::PackContext;
use crate::config::Config;
use std::path::PathBuf;
use std::sync::Arc;

#[test]
fn test_pack_context_out_dir_is_rooted() {
    let config = Arc::new(Config::parse("service: svc\n").unwrap());
    let ctx = PackContext::new(config, "/project", "1.0.0");
    assert_eq!(ctx.out_dir(), PathBuf::from("/project/out"));
    assert_eq!(ctx.version(), "1.0.0");
    assert_eq!(ctx.config().service, "svc");
}

#[cfg(unix)]
#[test]
fn test_pack_context_absolute_output_dir() {
    let config = Arc::new(Config::parse("service: svc\ntools:\n  output_dir: /tmp/dist\n").unwrap());
    let ctx = PackContext::new(config, "/project", "1.0.0");
    assert_eq!(ctx.out_dir(), PathBuf::from("/tmp/dist"));
}
