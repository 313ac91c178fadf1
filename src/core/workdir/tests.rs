// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::WorkDir;
use crate::error::{HumaError, HumaResult};

#[test]
fn test_enter_and_restore() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("cli")).unwrap();

    let mut workdir = WorkDir::new(tmp.path());
    {
        let guard = workdir.enter("cli").unwrap();
        assert_eq!(guard.current(), tmp.path().join("cli"));
        assert_eq!(guard.root(), tmp.path());
        assert_eq!(guard.depth(), 2);
    }
    assert_eq!(workdir.current(), tmp.path());
    assert_eq!(workdir.depth(), 1);
}

#[test]
fn test_restored_on_error_path() {
    fn failing_stage(workdir: &mut WorkDir) -> HumaResult<()> {
        let guard = workdir.enter("cli")?;
        assert!(guard.current().ends_with("cli"));
        Err(HumaError::Other("build failed".into()))
    }

    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("cli")).unwrap();

    let mut workdir = WorkDir::new(tmp.path());
    assert!(failing_stage(&mut workdir).is_err());
    assert_eq!(workdir.current(), tmp.path());
}

#[test]
fn test_nested_enter() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("a/b")).unwrap();

    let mut workdir = WorkDir::new(tmp.path());
    {
        let mut outer = workdir.enter("a").unwrap();
        {
            let inner = outer.enter("b").unwrap();
            assert_eq!(inner.current(), tmp.path().join("a/b"));
        }
        assert_eq!(outer.current(), tmp.path().join("a"));
    }
    assert_eq!(workdir.current(), tmp.path());
}

#[test]
fn test_enter_missing_dir_fails_without_push() {
    let tmp = tempfile::tempdir().unwrap();
    let mut workdir = WorkDir::new(tmp.path());

    let err = workdir.enter("cli").unwrap_err();
    assert!(matches!(err, HumaError::Fs(_)));
    assert_eq!(workdir.depth(), 1);
}
