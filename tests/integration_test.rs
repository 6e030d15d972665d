// tests/integration_test.rs
//
// Drives the real binary against a fake `poetry` shell script.
#![cfg(unix)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_POETRY: &str = r#"#!/bin/sh
echo "$@" >> calls.log
case "$1" in
  version)
    case "$2" in
      patch) v=1.0.1 ;;
      minor) v=1.1.0 ;;
      major) v=2.0.0 ;;
      *) exit 2 ;;
    esac
    printf '[tool.poetry]\nname = "demo"\nversion = "%s"\n' "$v" > pyproject.toml
    ;;
  build)
    if [ -n "$FAKE_BUILD_EXIT" ]; then exit "$FAKE_BUILD_EXIT"; fi
    mkdir -p dist
    : > dist/demo.tar.gz
    ;;
  publish)
    ;;
esac
"#;

const MANIFEST: &str = "[tool.poetry]\nname = \"demo\"\nversion = \"1.0.0\"\n";

struct Fixture {
    project: TempDir,
    _bin: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let bin = tempfile::tempdir().unwrap();
        let poetry = bin.path().join("poetry");
        fs::write(&poetry, FAKE_POETRY).unwrap();
        fs::set_permissions(&poetry, fs::Permissions::from_mode(0o755)).unwrap();

        let project = tempfile::tempdir().unwrap();
        fs::write(project.path().join("pyproject.toml"), MANIFEST).unwrap();
        fs::write(
            project.path().join("poetry-release.toml"),
            format!(
                "[tools]\npackager = \"{}\"\ninstaller = \"{}\"\n",
                poetry.display(),
                bin.path().join("no-such-pip").display()
            ),
        )
        .unwrap();

        Fixture {
            project,
            _bin: bin,
        }
    }

    fn root(&self) -> &Path {
        self.project.path()
    }

    fn calls(&self) -> String {
        fs::read_to_string(self.root().join("calls.log")).unwrap_or_default()
    }

    fn manifest(&self) -> String {
        fs::read_to_string(self.root().join("pyproject.toml")).unwrap()
    }

    fn command(&self, stdin: &str) -> Command {
        let mut cmd = Command::cargo_bin("poetry-release").unwrap();
        cmd.current_dir(self.root()).write_stdin(stdin.to_string());
        cmd
    }

    /// Commit every file so the working tree is clean
    fn init_git(&self) -> git2::Repository {
        fs::write(self.root().join(".gitignore"), "calls.log\ndist/\n").unwrap();

        let repo = git2::Repository::init(self.root()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Release Bot").unwrap();
            config.set_str("user.email", "release@example.com").unwrap();
        }
        {
            let mut index = repo.index().unwrap();
            index
                .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
                .unwrap();
            index.write().unwrap();
            let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
            let sig = repo.signature().unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
        }
        repo
    }
}

fn tag_names(repo: &git2::Repository) -> Vec<String> {
    repo.tag_names(None)
        .unwrap()
        .iter()
        .flatten()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help() {
    let output = Command::cargo_bin("poetry-release")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("poetry-release"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_minor_release_end_to_end() {
    let fixture = Fixture::new();

    let output = fixture.command("2\ny\nn\n").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://pypi.org/project/demo/1.1.0/"));
    assert!(fixture.manifest().contains("version = \"1.1.0\""));
    assert_eq!(fixture.calls(), "version minor\nbuild\npublish\n");
}

#[test]
fn test_tag_created_in_git_repository() {
    let fixture = Fixture::new();
    let repo = fixture.init_git();

    let output = fixture.command("1\ny\ny\n").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(tag_names(&repo), vec!["v1.0.1"]);

    let tag = repo
        .find_reference("refs/tags/v1.0.1")
        .unwrap()
        .peel_to_tag()
        .unwrap();
    assert!(tag.message().unwrap().starts_with("Release version 1.0.1"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("git push origin v1.0.1"));
}

#[test]
fn test_dirty_tree_cancel_exits_zero() {
    let fixture = Fixture::new();
    let repo = fixture.init_git();
    fs::write(fixture.root().join("scratch.py"), "print('wip')\n").unwrap();

    fixture.command("n\n").assert().success();

    assert_eq!(fixture.calls(), "");
    assert!(tag_names(&repo).is_empty());
}

#[test]
fn test_invalid_choice_exits_one() {
    let fixture = Fixture::new();

    let output = fixture.command("5\n").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid choice"));
    assert_eq!(fixture.manifest(), MANIFEST);
    assert_eq!(fixture.calls(), "");
}

#[test]
fn test_declined_publish_exits_zero() {
    let fixture = Fixture::new();

    fixture.command("4\nn\n").assert().success();

    assert_eq!(fixture.calls(), "build\n");
    assert!(fixture.root().join("dist/demo.tar.gz").exists());
}

#[test]
fn test_build_tool_exit_code_is_propagated() {
    let fixture = Fixture::new();

    let output = fixture
        .command("4\ny\ny\n")
        .env("FAKE_BUILD_EXIT", "3")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(!fixture.calls().contains("publish"));
}

#[test]
fn test_missing_manifest_exits_one() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.root().join("pyproject.toml")).unwrap();

    let output = fixture.command("").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Manifest not found"));
}

#[test]
fn test_missing_packager_exits_one() {
    let fixture = Fixture::new();
    let missing: PathBuf = fixture.root().join("bin/poetry");
    fs::write(
        fixture.root().join("poetry-release.toml"),
        format!("[tools]\npackager = \"{}\"\n", missing.display()),
    )
    .unwrap();

    let output = fixture.command("").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("was not found"));
}

#[test]
fn test_non_executable_packager_fails_before_cleanup() {
    let fixture = Fixture::new();
    let packager = fixture.root().join("poetry");
    fs::write(&packager, FAKE_POETRY).unwrap();
    fs::set_permissions(&packager, fs::Permissions::from_mode(0o644)).unwrap();
    fs::write(
        fixture.root().join("poetry-release.toml"),
        format!("[tools]\npackager = \"{}\"\n", packager.display()),
    )
    .unwrap();
    fs::create_dir(fixture.root().join("dist")).unwrap();

    let output = fixture.command("4\ny\n").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("was not found"));
    assert!(fixture.root().join("dist").is_dir());
}
