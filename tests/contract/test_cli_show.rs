// Contract test for `buildver show` command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn buildver(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("buildver").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BUILDVER_VERSION")
        .env("XDG_CONFIG_HOME", dir.path().join("config"));
    cmd
}

#[test]
fn test_show_reads_default_version_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("version.txt"), "v3.2.1\n").unwrap();

    buildver(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout("Running version: v3.2.1\n");
}

#[test]
fn test_show_literal_takes_precedence() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("version.txt"), "v3.2.1\n").unwrap();

    buildver(&temp_dir)
        .args(["show", "--literal", "v9.9.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v9.9.9"));
}

#[test]
fn test_show_env_variable() {
    let temp_dir = TempDir::new().unwrap();

    buildver(&temp_dir)
        .env("BUILDVER_VERSION", "v2.0.1")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("v2.0.1"));
}

#[test]
fn test_show_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("build")).unwrap();
    fs::write(temp_dir.path().join("build").join("VERSION"), "v0.4.0").unwrap();
    fs::write(
        temp_dir.path().join("buildver.toml"),
        "version_file = \"build/VERSION\"\nlog_prefix = \"Starting\"\n",
    )
    .unwrap();

    buildver(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout("Starting: v0.4.0\n");
}

#[test]
fn test_show_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("release.txt");
    fs::write(&path, "v5.6.7\n").unwrap();

    let output = buildver(&temp_dir)
        .args(["show", "--json", "--file"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["version"], "v5.6.7");
    assert!(json["source"].as_str().unwrap().ends_with("release.txt"));
}

#[test]
fn test_show_missing_version_file() {
    let temp_dir = TempDir::new().unwrap();

    buildver(&temp_dir)
        .arg("show")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to read version file version.txt"));
}

#[test]
fn test_show_invalid_version_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("version.txt"), "1.2.3\n").unwrap();

    buildver(&temp_dir)
        .arg("show")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing version prefix"))
        .stderr(predicate::str::contains("Failed to parse version from version.txt"));
}

#[test]
fn test_show_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();

    buildver(&temp_dir)
        .args(["show", "--literal", "v1.0.0", "--config", "nope.toml"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_show_resolves_version_file_next_to_config() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("buildver.toml"), "version_file = \"VERSION\"\n").unwrap();
    fs::write(sub.join("VERSION"), "v1.2.3\n").unwrap();

    buildver(&temp_dir)
        .args(["show", "--config", "sub/buildver.toml"])
        .assert()
        .success()
        .stdout("Running version: v1.2.3\n");
}

#[test]
fn test_show_empty_env_variable_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("version.txt"), "v3.2.1\n").unwrap();

    buildver(&temp_dir)
        .env("BUILDVER_VERSION", "")
        .arg("show")
        .assert()
        .success()
        .stdout("Running version: v3.2.1\n");
}
