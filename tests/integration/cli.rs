//! End-to-end runs of the `luhnmod` binary.

use std::fs;
use std::process::{Command, Output, Stdio};

use super::common::{HEX_ALPHABET, ODD_ALPHABET};
use luhnmod::CASE_INSENSITIVE_ALPHABET;
use tempfile::TempDir;

/// Run the luhnmod binary with color disabled.
fn run_luhnmod(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_luhnmod"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run luhnmod")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_config(dir: &TempDir, json: &str) -> String {
    let path = dir.path().join("luhn.json");
    fs::write(&path, json).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// GENERATE
// ============================================================================

#[test]
fn generate_prints_signed_phrase() {
    let output = run_luhnmod(&["generate", "FoO"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "foo5");
}

#[test]
fn generate_check_only() {
    let output = run_luhnmod(&["generate", "--check-only", "FoO"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5");
}

#[test]
fn generate_json() {
    let output = run_luhnmod(&["generate", "--json", "FoO"]);
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["phrase"], "foo");
    assert_eq!(json["checksum"], "5");
}

#[test]
fn match_case_applies_to_the_call_only() {
    // Uppercase is dropped by the 36-symbol alphabet when matching case
    let output = run_luhnmod(&["--match-case", "true", "generate", "FoO"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "on");
}

// ============================================================================
// VALIDATE
// ============================================================================

#[test]
fn validate_exit_codes() {
    let valid = run_luhnmod(&["validate", "foo5"]);
    assert_eq!(valid.status.code(), Some(0));
    assert_eq!(stdout(&valid), "valid");

    let invalid = run_luhnmod(&["validate", "foo6"]);
    assert_eq!(invalid.status.code(), Some(1));
    assert_eq!(stdout(&invalid), "invalid");
}

#[test]
fn validate_json() {
    let output = run_luhnmod(&["validate", "--json", "F-o-O-5"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), r#"{"phrase":"foo5","isValid":true}"#);
}

#[test]
fn validate_json_invalid_still_exits_one() {
    let output = run_luhnmod(&["validate", "--json", "foo6"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), r#"{"phrase":"foo6","isValid":false}"#);
}

// ============================================================================
// ALPHABET & CONFIGURATION
// ============================================================================

#[test]
fn alphabet_shows_default() {
    let output = run_luhnmod(&["alphabet"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![CASE_INSENSITIVE_ALPHABET, "36 symbols"]);
}

#[test]
fn case_sensitive_flag_selects_62_symbols() {
    let output = run_luhnmod(&["--case-sensitive", "generate", "FoO"]);
    assert_eq!(stdout(&output), "FoOK");
}

#[test]
fn config_file_sets_case_sensitivity() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"caseSensitive": true}"#);

    let output = run_luhnmod(&["--config", &config, "generate", "FoO"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "FoOK");
}

#[test]
fn case_insensitive_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"caseSensitive": true}"#);

    let output = run_luhnmod(&["--config", &config, "--case-insensitive", "generate", "FoO"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "foo5");
}

#[test]
fn alphabet_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!(r#"{{"alphabet": "{}"}}"#, HEX_ALPHABET));

    let from_file = run_luhnmod(&["--config", &config, "generate", "ABC"]);
    assert_eq!(stdout(&from_file), "abc7");

    let overridden = run_luhnmod(&[
        "--config",
        &config,
        "--alphabet",
        "0123456789",
        "generate",
        "7992-7398-71",
    ]);
    assert_eq!(overridden.status.code(), Some(0));
    assert_eq!(stdout(&overridden), "79927398713");
}

#[test]
fn conflicting_case_flags_are_rejected() {
    let output = run_luhnmod(&["--case-sensitive", "--case-insensitive", "alphabet"]);
    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn odd_alphabet_exits_two_with_message() {
    let output = run_luhnmod(&["--alphabet", ODD_ALPHABET, "generate", "ab"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let err = stderr(&output);
    assert!(err.starts_with("error: unusable alphabet"), "stderr: {}", err);
    assert!(
        err.contains("dictionary is of invalid length (5). The length needs to be even"),
        "stderr: {}",
        err
    );
}

#[test]
fn missing_config_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    let output = run_luhnmod(&["--config", &missing.to_string_lossy(), "alphabet"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("loading config"));
}

#[test]
fn error_prefix_is_plain_when_stderr_is_redirected() {
    // Color allowed, stdout left on the parent's stream, stderr captured
    let output = Command::new(env!("CARGO_BIN_EXE_luhnmod"))
        .args(["--alphabet", ODD_ALPHABET, "generate", "ab"])
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run luhnmod");

    assert_eq!(output.status.code(), Some(2));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(!err.contains('\x1b'), "escape codes in stderr: {:?}", err);
    assert!(err.starts_with("error:"));
}
