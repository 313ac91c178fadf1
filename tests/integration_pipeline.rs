// huma-build: Service Release Pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end pipeline tests.
//!
//! Each test builds a throwaway project with shell scripts standing in for the
//! service binary, the Go toolchain and the SDK generator.

#![cfg(unix)]

use std::fs::File;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use huma_build::config::CONFIG_FILE;
use huma_build::error::{ConfigError, HumaError, ProcessError};
use huma_build::pipeline::BuildPipeline;
use tempfile::TempDir;

/// Service binary: `openapi <path>` writes a document, `--version` prints one.
const FAKE_SERVICE: &str = r#"
case "$1" in
  openapi) echo '{"openapi": "3.0.3"}' > "$2" ;;
  --version) echo "${FAKE_VERSION-petstore version 1.2.3}" ;;
  *) echo "unknown command $1" >&2; exit 64 ;;
esac
"#;

/// SDK generator: writes a small tree under its `-o` argument.
const FAKE_GENERATOR: &str = r##"
while [ $# -gt 0 ]; do
  case "$1" in
    -g) lang="$2"; shift ;;
    -i) spec="$2"; shift ;;
    -o) dir="$2"; shift ;;
  esac
  shift
done
[ -f "$spec" ] || { echo "missing spec $spec" >&2; exit 2; }
mkdir -p "$dir/docs"
echo "$lang" > "$dir/README.md"
echo "# api" > "$dir/docs/api.md"
"##;

/// CLI build: drops `pets.exe` or `pets` depending on `GOOS`.
const FAKE_CLI_BUILD: &str =
    r#"if [ "$GOOS" = windows ]; then echo "$GOOS" > pets.exe; else echo "$GOOS" > pets; fi"#;

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

struct Project {
    dir: TempDir,
}

impl Project {
    /// A project whose build step records that it ran.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        write_script(&dir.path().join("bin/petstore"), FAKE_SERVICE);
        write_script(&dir.path().join("bin/generator"), FAKE_GENERATOR);
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Writes `.huma.yaml`: `extra` followed by the fake tool locations.
    fn config(&self, extra: &str) -> &Self {
        let yaml = format!(
            "{extra}\ntools:\n  service: bin/petstore\n  sdk_generator: {}\n",
            self.path("bin/generator").display()
        );
        std::fs::write(self.path(CONFIG_FILE), yaml).unwrap();
        self
    }

    fn with_cli(&self) -> &Self {
        std::fs::create_dir(self.path("cli")).unwrap();
        self
    }

    fn relative(&self, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(self.root()).unwrap().display().to_string())
            .collect()
    }
}

fn zip_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn config_error(err: &anyhow::Error) -> Option<&ConfigError> {
    match err.downcast_ref::<HumaError>()? {
        HumaError::Config(e) => Some(&**e),
        _ => None,
    }
}

fn process_error(err: &anyhow::Error) -> Option<&ProcessError> {
    match err.downcast_ref::<HumaError>()? {
        HumaError::Process(e) => Some(&**e),
        _ => None,
    }
}

// =============================================================================
// Successful runs
// =============================================================================

#[tokio::test]
async fn pipeline_full_release() {
    let project = Project::new();
    project
        .config(&format!(
            "service: petstore\ncommand: touch tested && touch installed\ncli:\n  name: pets\n  generate: touch generated\n  command: '{FAKE_CLI_BUILD}'\nsdk-languages: [go, python]"
        ))
        .with_cli();

    let report = BuildPipeline::new(project.root()).run().await.unwrap();

    assert_eq!(report.version(), "1.2.3");
    assert_eq!(report.spec(), project.path("petstore.json"));
    assert!(project.path("petstore.json").is_file());
    assert!(project.path("tested").is_file());
    assert!(project.path("installed").is_file());
    assert!(project.path("cli/generated").is_file());

    insta::assert_debug_snapshot!(project.relative(report.artifacts()), @r#"
    [
        "out/pets-windows-1.2.3.zip",
        "out/pets-mac-1.2.3.zip",
        "out/pets-linux-1.2.3.zip",
        "out/petstore-go-1.2.3.zip",
        "out/petstore-python-1.2.3.zip",
    ]
    "#);

    assert_eq!(zip_names(&project.path("out/pets-windows-1.2.3.zip")), vec!["pets.exe"]);
    assert_eq!(zip_names(&project.path("out/pets-linux-1.2.3.zip")), vec!["pets"]);
    insta::assert_debug_snapshot!(zip_names(&project.path("out/petstore-python-1.2.3.zip")), @r#"
    [
        "petstore-python-1.2.3/",
        "petstore-python-1.2.3/README.md",
        "petstore-python-1.2.3/docs/",
        "petstore-python-1.2.3/docs/api.md",
    ]
    "#);
    // Generated SDK trees stay unpacked.
    assert!(project.path("out/petstore-go-1.2.3/README.md").is_file());
    assert_eq!(
        std::fs::read_to_string(project.path("out/petstore-go-1.2.3/docs/api.md")).unwrap(),
        "# api\n"
    );
}

#[tokio::test]
async fn pipeline_relative_sdk_generator_resolves_against_root() {
    let project = Project::new();
    std::fs::write(
        project.path(CONFIG_FILE),
        "service: petstore\ncommand: 'true'\nsdk-languages: [go]\ntools:\n  service: bin/petstore\n  sdk_generator: bin/generator\n",
    )
    .unwrap();

    let report = BuildPipeline::new(project.root()).run().await.unwrap();

    assert_eq!(
        project.relative(report.artifacts()),
        vec!["out/petstore-go-1.2.3.zip"]
    );
    assert!(project.path("out/petstore-go-1.2.3/docs/api.md").is_file());
}

#[tokio::test]
async fn pipeline_without_cli_folder() {
    let project = Project::new();
    project.config("service: petstore\ncommand: 'true'\nsdk-languages: [go]");

    let report = BuildPipeline::new(project.root()).run().await.unwrap();

    assert_eq!(
        project.relative(report.artifacts()),
        vec!["out/petstore-go-1.2.3.zip"]
    );
    let out: Vec<_> = std::fs::read_dir(project.path("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("petstore-cli"))
        .collect();
    assert!(out.is_empty(), "{out:?}");
}

#[tokio::test]
async fn pipeline_without_sdks_creates_output_dir() {
    let project = Project::new();
    project.config("service: petstore\ncommand: 'true'");

    let report = BuildPipeline::new(project.root()).run().await.unwrap();

    assert!(report.artifacts().is_empty());
    assert!(project.path("out").is_dir());
    assert!(project.path("petstore.json").is_file());
}

#[tokio::test]
async fn pipeline_existing_output_dir_is_reused() {
    let project = Project::new();
    project.config("service: petstore\ncommand: 'true'\nsdk-languages: [go]");
    std::fs::create_dir(project.path("out")).unwrap();
    std::fs::write(project.path("out/keep.txt"), "").unwrap();

    BuildPipeline::new(project.root()).run().await.unwrap();

    assert!(project.path("out/keep.txt").is_file());
    assert!(project.path("out/petstore-go-1.2.3.zip").is_file());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn pipeline_missing_config_file() {
    let project = Project::new();

    let err = BuildPipeline::new(project.root()).run().await.unwrap_err();

    assert!(matches!(
        config_error(&err),
        Some(ConfigError::NotFound(_))
    ));
}

#[tokio::test]
async fn pipeline_missing_service_runs_nothing() {
    let project = Project::new();
    project.config("command: touch ran\nsdk-languages: [go]");

    let err = BuildPipeline::new(project.root()).run().await.unwrap_err();

    assert!(matches!(
        config_error(&err),
        Some(ConfigError::MissingKey { key }) if key == "service"
    ));
    assert!(!project.path("ran").exists());
    assert!(!project.path("out").exists());
}

#[tokio::test]
async fn pipeline_failed_tests_skip_install_and_later_stages() {
    let project = Project::new();
    project
        .config("service: petstore\ncommand: 'echo FAIL: TestPets; false && touch installed'\nsdk-languages: [go]")
        .with_cli();

    let err = BuildPipeline::new(project.root()).run().await.unwrap_err();

    match process_error(&err) {
        Some(ProcessError::NonZeroExit { code, output, .. }) => {
            assert_eq!(*code, 1);
            assert_eq!(output, "FAIL: TestPets\n");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!project.path("installed").exists());
    assert!(!project.path("petstore.json").exists());
    assert!(!project.path("out").exists());
}

#[tokio::test]
async fn pipeline_empty_version_output() {
    let project = Project::new();
    project.config("service: petstore\ncommand: 'true'\nsdk-languages: [go]");
    write_script(
        &project.path("bin/petstore"),
        &FAKE_SERVICE.replace("${FAKE_VERSION-petstore version 1.2.3}", ""),
    );

    let err = BuildPipeline::new(project.root()).run().await.unwrap_err();

    assert!(matches!(
        process_error(&err),
        Some(ProcessError::UnexpectedOutput { .. })
    ));
    // The OpenAPI document and output directory exist, nothing was packaged.
    assert!(project.path("petstore.json").is_file());
    assert_eq!(std::fs::read_dir(project.path("out")).unwrap().count(), 0);
}

#[tokio::test]
async fn pipeline_failed_cli_build_skips_sdks() {
    let project = Project::new();
    project
        .config("service: petstore\ncommand: 'true'\ncli:\n  generate: 'true'\n  command: exit 2\nsdk-languages: [go]")
        .with_cli();

    let err = BuildPipeline::new(project.root()).run().await.unwrap_err();

    assert!(matches!(
        process_error(&err),
        Some(ProcessError::NonZeroExit { code: 2, .. })
    ));
    assert!(!project.path("out/petstore-go-1.2.3").exists());
}
