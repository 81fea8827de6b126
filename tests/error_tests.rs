//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn herald_bin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("herald").expect("binary builds");
    cmd.env("HERALD_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn invalid_json_payload_is_usage_error() {
    let dir = TempDir::new().unwrap();
    herald_bin(&dir)
        .args(["error", "--json", "{not json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn malformed_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[toast\n").unwrap();

    herald_bin(&dir)
        .args(["success", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn zero_timeout_in_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[toast]\ntimeout_ms = 0\n").unwrap();

    herald_bin(&dir)
        .args(["info", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout_ms"));
}

#[test]
fn zero_timeout_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    herald_bin(&dir)
        .args(["info", "x", "--timeout", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout_ms"));
}

#[test]
fn unknown_icon_is_usage_error() {
    let dir = TempDir::new().unwrap();
    herald_bin(&dir)
        .args(["confirm", "--icon", "skull"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid icon"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    herald_bin(&dir).assert().code(2);
}
