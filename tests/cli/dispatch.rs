// Integration tests for src/main.rs — exit codes and output of the binary.
//
// `run()` is private to the binary crate, so these tests invoke the compiled
// binary via `std::process::Command`. Cargo sets `CARGO_BIN_EXE_plughost`
// when running `cargo test`.

use std::path::PathBuf;
use std::process::{Command, Output};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn plughost_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_plughost"))
}

fn run(args: &[&str]) -> Output {
    Command::new(plughost_bin()).args(args).output().expect("spawn plughost")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help / version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_options() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Usage: plughost [options]"));
    assert!(text.contains("  -b, --blocksize (argument)\n    Blocksize\n"));
    assert!(text.contains("  --version\n"));
}

#[test]
fn short_help() {
    let output = run(&["-h"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Options:"));
}

#[test]
fn version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("plughost version "));
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_option_exits_1() {
    let output = run(&["--nonexistent"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Invalid option '--nonexistent'"));
    assert!(err.contains("--help"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_argument_exits_1() {
    let output = run(&["--blocksize"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Option 'blocksize' requires an argument, but none was given"));
}

#[test]
fn invalid_argument_exits_1() {
    let output = run(&["-i", "-v"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Option 'input' requires an argument, but '-v' is not valid"));
}

#[test]
fn failure_is_reported_once() {
    let output = run(&["--samplerate"]);
    assert_eq!(stderr(&output).matches("requires an argument").count(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Normal runs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_succeeds() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("audio settings"));
}

#[test]
fn quiet_suppresses_info() {
    let output = run(&["-q", "-b", "256"]);
    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
}

#[test]
fn verbose_logs_enabled_options() {
    let output = run(&["-v", "--samplerate", "48000"]);
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("option enabled"));
    assert!(err.contains("sample_rate=48000"));
}

#[test]
fn bad_number_exits_1() {
    let output = run(&["--channels", "stereo"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("expects a number"));
}

#[test]
fn color_none_has_no_escape_codes() {
    let output = run(&["--color", "none"]);
    assert!(output.status.success());
    assert!(!stderr(&output).contains('\u{1b}'));
}
