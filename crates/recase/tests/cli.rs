//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RECASE_DEFAULT_CASE")
        .env_remove("RECASE_STRICT_KEBAB")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("camel"))
        .stdout(predicate::str::contains("kebab"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// camel
// =============================================================================

#[test]
fn camel_converts_hyphenated_words() {
    cmd()
        .args(["camel", "abra-kadabra"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abraKadabra\n"));
}

#[test]
fn camel_converts_mixed_separators() {
    cmd()
        .args(["camel", "abra kadabra_123"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abraKadabra123\n"));
}

#[test]
fn camel_rejects_invalid_characters() {
    cmd()
        .args(["--color", "never", "camel", "112312#@@#"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Input contains invalid characters.",
        ));
}

#[test]
fn camel_rejects_numeric_only() {
    cmd()
        .args(["--color", "never", "camel", "123 456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input cannot be only numbers."));
}

#[test]
fn camel_rejects_non_string_json_input() {
    cmd()
        .args(["--color", "never", "camel", "--json-input", "123123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input must be a string."));
}

#[test]
fn camel_accepts_json_string_input() {
    cmd()
        .args(["camel", "--json-input", r#""abra-kadabra""#])
        .assert()
        .success()
        .stdout(predicate::str::diff("abraKadabra\n"));
}

#[test]
fn camel_accepts_leading_separator_after_double_dash() {
    cmd()
        .args(["camel", "--", "-abra kadabra"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abraKadabra\n"));
}

#[test]
fn camel_requires_input() {
    cmd()
        .arg("camel")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// dot
// =============================================================================

#[test]
fn dot_converts_mixed_separators() {
    cmd()
        .args(["dot", "abra kadabra_123"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abra.kadabra.123\n"));
}

#[test]
fn dot_rejects_numeric_only() {
    cmd()
        .args(["--color", "never", "dot", "123 456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input cannot be only numbers."));
}

#[test]
fn dot_rejects_empty_input() {
    cmd()
        .args(["--color", "never", "dot", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input string is empty."));
}

// =============================================================================
// kebab
// =============================================================================

#[test]
fn kebab_converts_each_argument() {
    cmd()
        .args(["kebab", "myVariableName", "Hello World_Test"])
        .assert()
        .success()
        .stdout(predicate::str::diff("my-variable-name\nhello-world-test\n"));
}

#[test]
fn kebab_does_not_validate_by_default() {
    cmd()
        .args(["kebab", "a#B"])
        .assert()
        .success()
        .stdout(predicate::str::diff("a#b\n"));
}

#[test]
fn kebab_strict_validates() {
    cmd()
        .args(["--color", "never", "kebab", "--strict", "a#B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input contains invalid characters."));
}

// =============================================================================
// convert, batches, JSON output
// =============================================================================

#[test]
fn convert_defaults_to_camel() {
    let tmp = tempfile::tempdir().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "abra kadabra"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abraKadabra\n"));
}

#[test]
fn convert_to_named_case() {
    cmd()
        .args(["convert", "--to", "dot", "Abra-Kadabra"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abra.kadabra\n"));
}

#[test]
fn convert_accepts_long_case_names() {
    cmd()
        .args(["convert", "--to", "kebab-case", "fooBar"])
        .assert()
        .success()
        .stdout(predicate::str::diff("foo-bar\n"));
}

#[test]
fn convert_rejects_unknown_case() {
    cmd()
        .args(["convert", "--to", "snake", "fooBar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn partial_failure_prints_successes_and_fails() {
    cmd()
        .args(["--color", "never", "camel", "one two", "123", "three four"])
        .assert()
        .failure()
        .stdout(predicate::str::diff("oneTwo\nthreeFour\n"))
        .stderr(predicate::str::contains("Input cannot be only numbers."))
        .stderr(predicate::str::contains("1 of 3"));
}

#[test]
fn json_output_reports_each_conversion() {
    let output = cmd()
        .args(["--json", "dot", "abra kadabra_123", "#"])
        .assert()
        .failure();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("--json should output valid JSON");
    let items = json.as_array().expect("array of conversions");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["case"], "dot");
    assert_eq!(items[0]["output"], "abra.kadabra.123");
    assert_eq!(items[1]["error_kind"], "invalid-characters");
    assert!(items[1].get("output").is_none());
}

#[test]
fn file_input_converts_each_line() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "user name\n\nfirst_login-date\n").unwrap();
    cmd()
        .args(["dot", "--file", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("user.name\nfirst.login.date\n"));
}

#[test]
fn file_and_text_conflict() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    cmd()
        .args(["dot", "--file", tmp.path().to_str().unwrap(), "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["dot", "--file", "/nonexistent/recase/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Global Flags & Error Cases
// =============================================================================

#[test]
fn verbose_and_quiet_flags_accepted() {
    cmd().args(["-vv", "camel", "a b"]).assert().success();
    cmd().args(["-q", "camel", "a b"]).assert().success();
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
