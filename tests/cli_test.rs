//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bootstrap a local Trailhead"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_path_like_directory_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.current_dir(temp.path());
    cmd.arg("nested/name");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("plain name"));
    Ok(())
}

#[test]
fn cli_aborts_when_target_directory_exists() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    std::fs::create_dir(temp.path().join("my-app"))?;

    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.current_dir(temp.path());
    cmd.arg("my-app").arg("--yes");
    // Exit 1 whether the directory pre-check or a missing toolchain fires
    // first on this host; either way nothing is created.
    cmd.assert().failure().code(1);
    Ok(())
}

#[test]
fn cli_rejects_verbose_with_quiet() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.arg("-v").arg("-q");
    cmd.assert().failure().code(2);
    Ok(())
}
