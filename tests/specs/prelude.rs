//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the stepdefs binary
pub fn stepdefs_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stepdefs"));
    cmd.env_remove("STEPDEFS_CONFIG");
    cmd.env_remove("STEPDEFS_LOG");
    cmd
}

/// Absolute path of a fixture project under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run a subcommand for `feature` inside the fixture and return stdout lines
/// relative to the fixture root.
pub fn resolve_lines(fixture_name: &str, subcommand: &str, feature: &str) -> Vec<String> {
    let root = fixture(fixture_name);
    let output = stepdefs_cmd()
        .args([subcommand, feature])
        .current_dir(&root)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stepdefs {subcommand} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    relative_lines(&root, &String::from_utf8(output.stdout).unwrap())
}

/// Strip `root` from each absolute line of output.
pub fn relative_lines(root: &Path, stdout: &str) -> Vec<String> {
    let prefix = format!("{}/", root.display());
    stdout
        .lines()
        .map(|line| line.strip_prefix(&prefix).unwrap_or(line).to_string())
        .collect()
}

/// Create a temporary project from (path, content) pairs.
pub fn temp_project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (path, content) in files {
        let full_path = dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
    std::fs::create_dir_all(dir.path().join(".git")).unwrap();
    dir
}
