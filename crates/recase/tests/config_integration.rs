//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RECASE_DEFAULT_CASE")
        .env_remove("RECASE_STRICT_KEBAB")
        .env_remove("RECASE_LOG_DIR")
        .env_remove("RECASE_LOG_PATH");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["default_case"], "camel");
    assert_eq!(json["config"]["strict_kebab"], false);
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "default_case = \"dot\"\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["default_case"], "dot");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".recase.toml"), "should report dotfile: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("recase.yaml"), "strict_kebab: true\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["strict_kebab"], true);
}

#[test]
fn json_config_format_supported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("recase.json"),
        r#"{"default_case": "kebab", "max_input_bytes": 2048}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["default_case"], "kebab");
    assert_eq!(json["config"]["max_input_bytes"], 2048);
}

#[test]
fn invalid_config_value_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "default_case = \"snake\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "default_case = \"dot\"\n").unwrap();
    let explicit = tmp.path().join("other.toml");
    fs::write(&explicit, "default_case = \"kebab\"\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["default_case"], "kebab");
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "default_case = \"dot\"\n").unwrap();

    cmd()
        .env("RECASE_DEFAULT_CASE", "kebab")
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "fooBar"])
        .assert()
        .success()
        .stdout(predicate::str::diff("foo-bar\n"));
}

// =============================================================================
// Config effects on commands
// =============================================================================

#[test]
fn convert_uses_configured_default_case() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "default_case = \"dot\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "abra kadabra_123"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abra.kadabra.123\n"));
}

#[test]
fn to_flag_beats_configured_default_case() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "default_case = \"dot\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "--to", "camel", "a b"])
        .assert()
        .success()
        .stdout(predicate::str::diff("aB\n"));
}

#[test]
fn strict_kebab_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "strict_kebab = true\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--color", "never", "kebab", "a#b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input contains invalid characters."));
}

#[test]
fn input_limit_applies_to_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".recase.toml"), "max_input_bytes = 4\n").unwrap();
    let input = tmp.path().join("names.txt");
    fs::write(&input, "some long name\n").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "dot",
            "--file",
            input.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn log_dir_from_config_receives_log_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    fs::write(
        tmp.path().join(".recase.toml"),
        format!("log_dir = {:?}\nlog_level = \"debug\"\n", logs.to_str().unwrap()),
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "camel", "a b"])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert!(!entries.is_empty(), "expected a log file in {}", logs.display());
}
