//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use huekit::models::{Color, Palette};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the huekit binary
pub fn huekit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huekit")
}

/// Creates an empty config directory so tests never read the user's config.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Creates a config directory holding `content` as config.toml.
pub fn temp_config_with(content: &str) -> TempDir {
    let temp_dir = temp_config_dir();
    fs::write(temp_dir.path().join("config.toml"), content).expect("Failed to write config");
    temp_dir
}

/// Builds a huekit command isolated to `config_dir`.
pub fn huekit_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(huekit_bin());
    cmd.env("HUEKIT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs huekit with isolated config and returns its output.
pub fn run_huekit(args: &[&str], config_dir: &Path) -> Output {
    huekit_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs huekit with `stdin` piped in.
pub fn run_huekit_with_input(args: &[&str], config_dir: &Path, stdin: &str) -> Output {
    let mut child = huekit_command(args, config_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

/// Stdout as text.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as text.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts a zero exit status, showing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr_of(output)
    );
}

/// Parses a hex color, panicking on malformed fixtures.
pub fn color(hex: &str) -> Color {
    Color::from_hex(hex).expect("fixture color should be valid")
}

/// Builds an unlocked palette from hex strings.
pub fn palette_of(hexes: &[&str]) -> Palette {
    Palette::from_colors(hexes.iter().map(|h| color(h))).expect("fixture palette size")
}

/// Path of a file inside a temp directory.
pub fn temp_file(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
