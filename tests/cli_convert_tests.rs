//! End-to-end tests for the convert and harmony commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// convert
// ============================================================================

#[test]
fn test_convert_human_readable() {
    let config = temp_config_dir();
    let output = run_huekit(&["convert", "#3B82F6"], config.path());
    assert_success(&output);

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Hex: #3b82f6"), "stdout: {stdout}");
    assert!(stdout.contains("RGB: rgb(59, 130, 246)"));
    assert!(stdout.contains("HSL: hsl(217, 91%, 60%)"));
}

#[test]
fn test_convert_json_without_hash() {
    let config = temp_config_dir();
    let output = run_huekit(&["convert", "ff0000", "--json"], config.path());
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["hex"], "#ff0000");
    assert_eq!(json["rgb"]["r"], 255);
    assert_eq!(json["rgb"]["g"], 0);
    assert_eq!(json["hsl"]["h"], 0);
    assert_eq!(json["hsl"]["s"], 100);
    assert_eq!(json["hsl"]["l"], 50);
}

#[test]
fn test_convert_rejects_malformed_hex() {
    let config = temp_config_dir();
    for bad in ["#12345", "#GGGGGG", "blue"] {
        let output = run_huekit(&["convert", bad], config.path());
        assert_eq!(output.status.code(), Some(1), "{bad} should be rejected");
        assert!(stderr_of(&output).contains("Invalid color format"));
    }
}

// ============================================================================
// harmony
// ============================================================================

#[test]
fn test_harmony_complementary_default() {
    let config = temp_config_dir();
    let output = run_huekit(&["harmony", "#3B82F6"], config.path());
    assert_success(&output);

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "#3b82f6");
    assert_eq!(lines[1], "#f6af3c");
}

#[test]
fn test_harmony_json_reports_strategy() {
    let config = temp_config_dir();
    let output = run_huekit(
        &["harmony", "3b82f6", "--strategy", "split_complementary", "--json"],
        config.path(),
    );
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["base"], "#3b82f6");
    assert_eq!(json["strategy"], "split-complementary");
    assert_eq!(json["colors"].as_array().unwrap().len(), 5);
}

#[test]
fn test_harmony_random_is_repeatable_with_seed() {
    let config = temp_config_dir();
    let args = ["harmony", "#000000", "--strategy", "random", "--seed", "11"];
    let first = run_huekit(&args, config.path());
    let second = run_huekit(&args, config.path());
    assert_success(&first);
    assert_eq!(stdout_of(&first), stdout_of(&second));
}

#[test]
fn test_harmony_css_variables_share_numbers_for_gray() {
    let config = temp_config_dir();
    let output = run_huekit(
        &["harmony", "#808080", "--strategy", "tetradic", "--format", "css-variables"],
        config.path(),
    );
    assert_success(&output);

    // Hue rotations of an achromatic color collapse onto the base
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in &lines[..4] {
        assert!(line.starts_with("--color-1:"), "line: {line}");
    }
}

#[test]
fn test_harmony_unknown_strategy_fails() {
    let config = temp_config_dir();
    let output = run_huekit(&["harmony", "#3b82f6", "--strategy", "rainbow"], config.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("rainbow"));
}
