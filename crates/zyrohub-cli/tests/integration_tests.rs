//! Integration tests for zyrohub-cli.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary isolated from the user's config, `.env` and environment overrides.
fn zyrohub(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("zyrohub");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("ZYROHUB_DEFAULTS__PACKAGE_MANAGER")
        .env_remove("ZYROHUB_DEFAULTS__AUTHOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_create_command_help() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zyrohub"));
}

#[test]
fn test_config_path_uses_platform_dir() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_no_color_env_with_numeric_value() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .env("NO_COLOR", "1")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_get_default() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .args(["config", "get", "defaults.package_manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.package_manager = npm"));
}

#[test]
fn test_config_get_from_environment() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .env("ZYROHUB_DEFAULTS__PACKAGE_MANAGER", "pnpm")
        .args(["config", "get", "defaults.package_manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.package_manager = pnpm"));
}

#[test]
fn test_config_get_from_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("custom.toml");
    fs::write(&file, "[defaults]\nauthor = \"Ada Lovelace\"\n").unwrap();

    zyrohub(&home)
        .arg("--config")
        .arg(&file)
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.author = Ada Lovelace"));
}

#[test]
fn test_config_list_shows_sections() {
    let home = TempDir::new().unwrap();
    zyrohub(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"))
        .stdout(predicate::str::contains("[output]"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_init_writes_default_config() {
    let home = TempDir::new().unwrap();
    zyrohub(&home).arg("init").assert().success();

    let written = home.path().join(".config").join("zyrohub").join("config.toml");
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.contains("package_manager = \"npm\""));

    // Second run keeps the file and only warns.
    zyrohub(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
